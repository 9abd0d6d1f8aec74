//! Variable labels.
//!
//! A label is opaque to the model: either an integer or a string. Labels are
//! totally ordered (every integer sorts before every string), which is what
//! gives an interaction its canonical orientation.

use std::fmt;
use std::num::TryFromIntError;

use serde::{Deserialize, Serialize};

/// A variable label, serialized as a bare JSON integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variable {
    Int(i64),
    Str(String),
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Int(i) => write!(f, "{i}"),
            Variable::Str(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Variable {
                fn from(v: $t) -> Self {
                    Variable::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<usize> for Variable {
    type Error = TryFromIntError;

    fn try_from(v: usize) -> Result<Self, Self::Error> {
        i64::try_from(v).map(Variable::Int)
    }
}

impl From<&str> for Variable {
    fn from(v: &str) -> Self {
        Variable::Str(v.to_string())
    }
}

impl From<String> for Variable {
    fn from(v: String) -> Self {
        Variable::Str(v)
    }
}

impl From<&Variable> for Variable {
    fn from(v: &Variable) -> Self {
        v.clone()
    }
}

/// Orders a pair so the smaller label comes first.
pub(crate) fn canonical_pair(u: Variable, v: Variable) -> (Variable, Variable) {
    if v < u {
        (v, u)
    } else {
        (u, v)
    }
}
