//! BQM ⇄ flat record conversion.
//!
//! Wire shape:
//!
//! ```json
//! {
//!   "linear": [[0, 1.0], [1, 2.0]],
//!   "quadratic": [[0, 1, 0.5]],
//!   "offset": -10.0,
//!   "vartype": "BINARY"
//! }
//! ```
//!
//! Linear terms are emitted in model order and interactions in canonical
//! orientation (smaller label first). Coefficients are copied bit-for-bit;
//! `serde_json` writes floats in shortest round-trip form.

use qubo_bqm::{BinaryQuadraticModel, Variable, Vartype};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::QuboError;

/// Serializable form of a [`BinaryQuadraticModel`].
///
/// `vartype` stays a plain string so an unrecognized name surfaces as
/// [`QuboError::UnknownVartype`] on decode rather than as a shape error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableBqm {
    pub linear: Vec<(Variable, f64)>,
    pub quadratic: Vec<(Variable, Variable, f64)>,
    pub offset: f64,
    pub vartype: String,
}

impl SerializableBqm {
    /// Shapes a parsed JSON value into a record. Unknown keys are ignored.
    pub fn from_value(value: Value) -> Result<Self, QuboError> {
        serde_json::from_value(value).map_err(|e| QuboError::MalformedRecord(e.to_string()))
    }

    /// Fails on the first NaN or infinite coefficient, which JSON cannot hold.
    pub fn ensure_finite(&self) -> Result<(), QuboError> {
        for (v, bias) in &self.linear {
            if !bias.is_finite() {
                return Err(QuboError::NonFiniteCoefficient(format!("linear bias of {v}")));
            }
        }
        for (u, v, bias) in &self.quadratic {
            if !bias.is_finite() {
                return Err(QuboError::NonFiniteCoefficient(format!(
                    "interaction bias of ({u}, {v})"
                )));
            }
        }
        if !self.offset.is_finite() {
            return Err(QuboError::NonFiniteCoefficient("offset".to_string()));
        }
        Ok(())
    }
}

/// Encodes every term of `bqm`, zero biases included.
pub fn bqm_to_serializable(bqm: &BinaryQuadraticModel) -> SerializableBqm {
    SerializableBqm {
        linear: bqm.linear().map(|(v, bias)| (v.clone(), bias)).collect(),
        quadratic: bqm
            .quadratic()
            .map(|((u, v), bias)| (u.clone(), v.clone(), bias))
            .collect(),
        offset: bqm.offset(),
        vartype: bqm.vartype().as_str().to_string(),
    }
}

/// Rebuilds a model from a record.
///
/// Duplicate linear labels and duplicate pairs (in either orientation) are
/// last-write-wins.
pub fn bqm_from_serializable(
    record: &SerializableBqm,
) -> Result<BinaryQuadraticModel, QuboError> {
    let vartype: Vartype = record
        .vartype
        .parse()
        .map_err(|_| QuboError::UnknownVartype(record.vartype.clone()))?;

    BinaryQuadraticModel::from_terms(
        record.linear.iter().map(|(v, bias)| (v, *bias)),
        record.quadratic.iter().map(|(u, v, bias)| ((u, v), *bias)),
        record.offset,
        vartype,
    )
    .map_err(|e| QuboError::MalformedRecord(e.to_string()))
}

impl From<&BinaryQuadraticModel> for SerializableBqm {
    fn from(bqm: &BinaryQuadraticModel) -> Self {
        bqm_to_serializable(bqm)
    }
}

impl TryFrom<&SerializableBqm> for BinaryQuadraticModel {
    type Error = QuboError;

    fn try_from(record: &SerializableBqm) -> Result<Self, Self::Error> {
        bqm_from_serializable(record)
    }
}
