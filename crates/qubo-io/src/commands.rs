//! Bodies of the `qubo` subcommands.

use std::fmt;
use std::path::Path;

use qubo_bqm::{BinaryQuadraticModel, Vartype};

use crate::{
    evaluate_bitstring_for_qubo, load_qubo_from_path, save_qubo_to_path, QuboError, SaveOptions,
};

/// Energy of `bitstring` under the model saved at `qubo`.
pub fn evaluate(qubo: impl AsRef<Path>, bitstring: &str) -> Result<f64, QuboError> {
    let bqm = load_qubo_from_path(qubo)?;
    evaluate_bitstring_for_qubo(bitstring, &bqm)
}

/// Loads `input` and saves it to `output` in canonical form. Returns the model.
pub fn normalize(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: SaveOptions,
) -> Result<BinaryQuadraticModel, QuboError> {
    let bqm = load_qubo_from_path(input)?;
    save_qubo_to_path(&bqm, output, options)?;
    Ok(bqm)
}

/// Headline numbers of a saved model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSummary {
    pub vartype: Vartype,
    pub num_variables: usize,
    pub num_interactions: usize,
    pub offset: f64,
}

impl From<&BinaryQuadraticModel> for ModelSummary {
    fn from(bqm: &BinaryQuadraticModel) -> Self {
        Self {
            vartype: bqm.vartype(),
            num_variables: bqm.num_variables(),
            num_interactions: bqm.num_interactions(),
            offset: bqm.offset(),
        }
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vartype:       {}", self.vartype)?;
        writeln!(f, "Variables:     {}", self.num_variables)?;
        writeln!(f, "Interactions:  {}", self.num_interactions)?;
        write!(f, "Offset:        {}", self.offset)
    }
}

pub fn inspect(qubo: impl AsRef<Path>) -> Result<ModelSummary, QuboError> {
    let bqm = load_qubo_from_path(qubo)?;
    Ok(ModelSummary::from(&bqm))
}
