//! Bitstring evaluation and sample-set export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use qubo_bqm::{BinaryQuadraticModel, Sample, SampleSet, Variable};
use serde::{Deserialize, Serialize};

use crate::QuboError;

/// Version tag prefixed onto exported result documents.
pub const SCHEMA_VERSION: &str = "zapata-v1";

/// Something that can be read as a sequence of 0/1 bits.
pub trait Bits {
    fn to_bits(&self) -> Result<Vec<i8>, QuboError>;
}

impl Bits for str {
    fn to_bits(&self) -> Result<Vec<i8>, QuboError> {
        self.chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(QuboError::InvalidBitstring(format!(
                    "unexpected character {other:?} in {self:?}"
                ))),
            })
            .collect()
    }
}

impl Bits for String {
    fn to_bits(&self) -> Result<Vec<i8>, QuboError> {
        self.as_str().to_bits()
    }
}

impl Bits for [u8] {
    fn to_bits(&self) -> Result<Vec<i8>, QuboError> {
        self.iter()
            .map(|&b| match b {
                0 | 1 => Ok(b as i8),
                other => Err(QuboError::InvalidBitstring(format!(
                    "bit value {other} is not 0 or 1"
                ))),
            })
            .collect()
    }
}

impl Bits for Vec<u8> {
    fn to_bits(&self) -> Result<Vec<i8>, QuboError> {
        self.as_slice().to_bits()
    }
}

impl<const N: usize> Bits for [u8; N] {
    fn to_bits(&self) -> Result<Vec<i8>, QuboError> {
        self.as_slice().to_bits()
    }
}

/// Energy of `bqm` at the assignment `{i: bitstring[i]}`.
///
/// Bit `i` is assigned to the integer label `i`. The bits are passed through as
/// 0/1 values whatever the model's vartype.
pub fn evaluate_bitstring_for_qubo<B>(
    bitstring: &B,
    bqm: &BinaryQuadraticModel,
) -> Result<f64, QuboError>
where
    B: Bits + ?Sized,
{
    let sample = bitstring
        .to_bits()?
        .into_iter()
        .enumerate()
        .map(|(i, bit)| {
            let label = Variable::try_from(i).map_err(|_| {
                QuboError::InvalidBitstring(format!("bit position {i} has no integer label"))
            })?;
            Ok((label, bit))
        })
        .collect::<Result<Sample, QuboError>>()?;
    Ok(bqm.energy(&sample)?)
}

/// Best sample of a run, as written by [`save_sample_set`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalSample {
    pub optimized_energy: f64,
    pub optimized_bitstring: Vec<i8>,
    pub schema: String,
}

impl OptimalSample {
    /// Picks the lowest-energy record of `sample_set`.
    pub fn from_sample_set(sample_set: &SampleSet) -> Result<Self, QuboError> {
        let lowest = sample_set.lowest().ok_or(QuboError::EmptySampleSet)?;
        Ok(Self {
            optimized_energy: lowest.energy,
            optimized_bitstring: lowest.sample.clone(),
            schema: format!("{SCHEMA_VERSION}-sample_set"),
        })
    }
}

/// Writes the lowest-energy sample of `sample_set` as a JSON document.
pub fn save_sample_set<W: Write>(sample_set: &SampleSet, mut writer: W) -> Result<(), QuboError> {
    let optimal = OptimalSample::from_sample_set(sample_set)?;
    if !optimal.optimized_energy.is_finite() {
        return Err(QuboError::NonFiniteCoefficient("optimized energy".to_string()));
    }
    let text = serde_json::to_string(&optimal).map_err(QuboError::Encode)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn save_sample_set_to_path(
    sample_set: &SampleSet,
    path: impl AsRef<Path>,
) -> Result<(), QuboError> {
    let file = File::create(path)?;
    save_sample_set(sample_set, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qubo_bqm::{BqmError, Vartype};

    #[test]
    fn string_and_byte_bitstrings_agree() {
        assert_eq!("0110".to_bits().unwrap(), vec![0, 1, 1, 0]);
        assert_eq!([0u8, 1, 1, 0].to_bits().unwrap(), vec![0, 1, 1, 0]);
        assert_eq!(String::from("1").to_bits().unwrap(), vec![1]);
    }

    #[test]
    fn invalid_bits_are_rejected() {
        assert!(matches!(
            "01a".to_bits(),
            Err(QuboError::InvalidBitstring(_))
        ));
        assert!(matches!(
            [0u8, 2].to_bits(),
            Err(QuboError::InvalidBitstring(_))
        ));
    }

    #[test]
    fn short_bitstring_misses_a_variable() {
        let bqm = BinaryQuadraticModel::from_terms(
            [(0, 1.0), (1, 1.0)],
            [((0, 1), 1.0)],
            0.0,
            Vartype::Binary,
        )
        .unwrap();
        let err = evaluate_bitstring_for_qubo("1", &bqm).unwrap_err();
        assert!(matches!(
            err,
            QuboError::Model(BqmError::MissingVariable(Variable::Int(1)))
        ));
    }

    #[test]
    fn infinite_lowest_energy_is_not_exported() {
        let mut set = SampleSet::new(vec![Variable::from(0)], Vartype::Binary);
        set.push(vec![1], f64::NEG_INFINITY).unwrap();
        let mut buf = Vec::new();
        assert!(matches!(
            save_sample_set(&set, &mut buf),
            Err(QuboError::NonFiniteCoefficient(_))
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn empty_sample_set_cannot_be_exported() {
        let set = SampleSet::new(vec![Variable::from(0)], Vartype::Binary);
        assert!(matches!(
            save_sample_set(&set, Vec::new()),
            Err(QuboError::EmptySampleSet)
        ));
    }
}
