//! Error type shared by the codec, persistence and utility functions.

use qubo_bqm::BqmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuboError {
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    #[error("unknown vartype `{0}`, expected `SPIN` or `BINARY`")]
    UnknownVartype(String),
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("{0} is not a finite number")]
    NonFiniteCoefficient(String),
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid bitstring: {0}")]
    InvalidBitstring(String),
    #[error("sample set is empty")]
    EmptySampleSet,
    #[error(transparent)]
    Model(#[from] BqmError),
}
