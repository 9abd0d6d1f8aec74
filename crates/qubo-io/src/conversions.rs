//! QUBO ⇄ Ising operator conversion.
//!
//! The Ising side uses the Pauli-Z convention of gate-model solvers: bit `x`
//! maps to the Z eigenvalue `z = 1 - 2x`, so bit 0 is `+1`. A measured
//! bitstring therefore has the same energy under both forms.

use indexmap::IndexMap;
use qubo_bqm::{BinaryQuadraticModel, BqmError, Sample, Variable, Vartype};

use crate::QuboError;

/// `constant + Σ f_i Z_i + Σ J_ij Z_i Z_j`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsingModel {
    pub constant: f64,
    pub fields: IndexMap<Variable, f64>,
    pub couplings: IndexMap<(Variable, Variable), f64>,
}

impl IsingModel {
    /// Value at `spins`, one `±1` Z eigenvalue per variable.
    pub fn energy(&self, spins: &Sample) -> Result<f64, QuboError> {
        let mut energy = self.constant;
        for (v, field) in &self.fields {
            energy += field * spin(spins, v)?;
        }
        for ((u, v), coupling) in &self.couplings {
            energy += coupling * spin(spins, u)? * spin(spins, v)?;
        }
        Ok(energy)
    }
}

fn spin(spins: &Sample, v: &Variable) -> Result<f64, QuboError> {
    spins
        .get(v)
        .map(|z| f64::from(*z))
        .ok_or_else(|| QuboError::Model(BqmError::MissingVariable(v.clone())))
}

/// Rewrites `qubo` over Z eigenvalues. A SPIN model is taken as already
/// using `s = 2x - 1`.
pub fn convert_qubo_to_ising(qubo: &BinaryQuadraticModel) -> IsingModel {
    let spin = qubo.change_vartype(Vartype::Spin);
    IsingModel {
        constant: spin.offset(),
        fields: spin.linear().map(|(v, h)| (v.clone(), -h)).collect(),
        couplings: spin
            .quadratic()
            .map(|((u, v), j)| ((u.clone(), v.clone()), j))
            .collect(),
    }
}

/// Rewrites an Ising operator as a BINARY model.
///
/// A coupling listed as both `(u, v)` and `(v, u)` is summed. A coupling of a
/// variable with itself is rejected.
pub fn convert_ising_to_qubo(ising: &IsingModel) -> Result<BinaryQuadraticModel, QuboError> {
    let mut spin = BinaryQuadraticModel::new(Vartype::Spin);
    for (v, field) in &ising.fields {
        spin.add_linear(v, -field);
    }
    for ((u, v), coupling) in &ising.couplings {
        spin.add_quadratic(u, v, *coupling)?;
    }
    spin.set_offset(ising.constant);
    Ok(spin.change_vartype(Vartype::Binary))
}
