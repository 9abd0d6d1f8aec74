//! Variable domain tag.

use std::fmt;
use std::str::FromStr;

use crate::BqmError;

/// Domain of every variable in a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vartype {
    /// Values in `{-1, +1}` (Ising).
    Spin,
    /// Values in `{0, 1}` (QUBO).
    Binary,
}

impl Vartype {
    /// Canonical wire name: `"SPIN"` or `"BINARY"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Vartype::Spin => "SPIN",
            Vartype::Binary => "BINARY",
        }
    }

    /// The two admissible values, low first.
    pub const fn values(self) -> [i8; 2] {
        match self {
            Vartype::Spin => [-1, 1],
            Vartype::Binary => [0, 1],
        }
    }

    pub fn contains(self, value: i8) -> bool {
        self.values().contains(&value)
    }

    /// Resolves a vartype from its value set, in any order (`{-1, 1}` or `{0, 1}`).
    pub fn from_values(values: &[i8]) -> Result<Self, BqmError> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        match sorted.as_slice() {
            [-1, 1] => Ok(Vartype::Spin),
            [0, 1] => Ok(Vartype::Binary),
            _ => Err(BqmError::UnknownVartype(format!("{values:?}"))),
        }
    }
}

impl fmt::Display for Vartype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vartype {
    type Err = BqmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SPIN" => Ok(Vartype::Spin),
            "BINARY" => Ok(Vartype::Binary),
            other => Err(BqmError::UnknownVartype(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Vartype {
    type Error = BqmError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&[i8]> for Vartype {
    type Error = BqmError;

    fn try_from(values: &[i8]) -> Result<Self, Self::Error> {
        Vartype::from_values(values)
    }
}
