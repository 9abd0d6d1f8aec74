//! Solver results: assignments over a fixed variable order, each with its energy.

use crate::{BinaryQuadraticModel, BqmError, Sample, Variable, Vartype};

/// One row of a [`SampleSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    /// Values aligned with [`SampleSet::variables`].
    pub sample: Vec<i8>,
    pub energy: f64,
    pub num_occurrences: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    variables: Vec<Variable>,
    vartype: Vartype,
    records: Vec<SampleRecord>,
}

impl SampleSet {
    pub fn new(variables: Vec<Variable>, vartype: Vartype) -> Self {
        Self {
            variables,
            vartype,
            records: Vec::new(),
        }
    }

    /// Evaluates every sample against `bqm`. Samples follow the model's
    /// variable order.
    pub fn from_samples_bqm<I>(bqm: &BinaryQuadraticModel, samples: I) -> Result<Self, BqmError>
    where
        I: IntoIterator<Item = Vec<i8>>,
    {
        let mut set = Self::new(bqm.variables().cloned().collect(), bqm.vartype());
        for sample in samples {
            let energy = bqm.energy(&set.assignment(&sample)?)?;
            set.push(sample, energy)?;
        }
        Ok(set)
    }

    /// Appends a sample seen once.
    pub fn push(&mut self, sample: Vec<i8>, energy: f64) -> Result<(), BqmError> {
        self.push_record(SampleRecord {
            sample,
            energy,
            num_occurrences: 1,
        })
    }

    pub fn push_record(&mut self, record: SampleRecord) -> Result<(), BqmError> {
        self.check_sample(&record.sample)?;
        self.records.push(record);
        Ok(())
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    pub fn records(&self) -> &[SampleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lowest-energy record; the earliest one wins ties.
    ///
    /// Records whose energy is NaN are skipped. `None` when no record has a
    /// comparable energy.
    pub fn lowest(&self) -> Option<&SampleRecord> {
        self.records
            .iter()
            .filter(|record| !record.energy.is_nan())
            .reduce(|best, record| {
                if record.energy < best.energy {
                    record
                } else {
                    best
                }
            })
    }

    /// Maps a row back to `{variable: value}`.
    pub fn assignment(&self, sample: &[i8]) -> Result<Sample, BqmError> {
        self.check_sample(sample)?;
        Ok(self
            .variables
            .iter()
            .cloned()
            .zip(sample.iter().copied())
            .collect())
    }

    fn check_sample(&self, sample: &[i8]) -> Result<(), BqmError> {
        if sample.len() != self.variables.len() {
            return Err(BqmError::SampleLength {
                expected: self.variables.len(),
                actual: sample.len(),
            });
        }
        if let Some(&value) = sample.iter().find(|x| !self.vartype.contains(**x)) {
            return Err(BqmError::InvalidValue {
                value,
                vartype: self.vartype,
            });
        }
        Ok(())
    }
}
