//! Binary quadratic model primitives.
//!
//! - [`BinaryQuadraticModel`]: linear and quadratic biases plus an offset over
//!   SPIN or BINARY variables, with energy evaluation.
//! - [`Variable`]: integer or string label.
//! - [`Vartype`]: the SPIN/BINARY tag and its single normalization path.
//! - [`SampleSet`]: solver output with a lowest-energy accessor.

mod error;
mod model;
mod sample_set;
mod variable;
mod vartype;

pub use error::BqmError;
pub use model::{BinaryQuadraticModel, Sample};
pub use sample_set::{SampleRecord, SampleSet};
pub use variable::Variable;
pub use vartype::Vartype;
