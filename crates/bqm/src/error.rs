use thiserror::Error;

use crate::{Variable, Vartype};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BqmError {
    #[error("unknown vartype `{0}`, expected `SPIN` or `BINARY`")]
    UnknownVartype(String),
    #[error("variable {0} cannot interact with itself")]
    SelfInteraction(Variable),
    #[error("sample is missing a value for variable {0}")]
    MissingVariable(Variable),
    #[error("sample has {actual} values but the sample set has {expected} variables")]
    SampleLength { expected: usize, actual: usize },
    #[error("value {value} is not a {vartype} value")]
    InvalidValue { value: i8, vartype: Vartype },
}
