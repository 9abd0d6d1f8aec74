//! Binary quadratic model.
//!
//! Linear terms keep insertion order. Interactions are keyed by the canonical
//! (smaller label first) orientation of the pair, so `(u, v)` and `(v, u)` always
//! address the same term.

use indexmap::IndexMap;

use crate::variable::canonical_pair;
use crate::{BqmError, Variable, Vartype};

/// A variable assignment, as consumed by [`BinaryQuadraticModel::energy`].
pub type Sample = IndexMap<Variable, i8>;

/// `offset + Σ a_i x_i + Σ b_ij x_i x_j` over SPIN or BINARY variables.
///
/// Equality compares the terms as maps: insertion order does not matter.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryQuadraticModel {
    linear: IndexMap<Variable, f64>,
    quadratic: IndexMap<(Variable, Variable), f64>,
    offset: f64,
    vartype: Vartype,
}

impl BinaryQuadraticModel {
    /// Empty model with zero offset.
    pub fn new(vartype: Vartype) -> Self {
        Self {
            linear: IndexMap::new(),
            quadratic: IndexMap::new(),
            offset: 0.0,
            vartype,
        }
    }

    /// Builds a model from term lists. Later entries overwrite earlier ones,
    /// including a pair given once as `(u, v)` and again as `(v, u)`.
    ///
    /// Interaction endpoints missing from `linear` are added with a zero bias.
    pub fn from_terms<L, K, Q, A, B>(
        linear: L,
        quadratic: Q,
        offset: f64,
        vartype: Vartype,
    ) -> Result<Self, BqmError>
    where
        L: IntoIterator<Item = (K, f64)>,
        K: Into<Variable>,
        Q: IntoIterator<Item = ((A, B), f64)>,
        A: Into<Variable>,
        B: Into<Variable>,
    {
        let mut bqm = Self::new(vartype);
        for (v, bias) in linear {
            bqm.set_linear(v, bias);
        }
        for ((u, v), bias) in quadratic {
            bqm.set_quadratic(u, v, bias)?;
        }
        bqm.offset = offset;
        Ok(bqm)
    }

    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    pub fn num_variables(&self) -> usize {
        self.linear.len()
    }

    pub fn num_interactions(&self) -> usize {
        self.quadratic.len()
    }

    pub fn contains(&self, v: &Variable) -> bool {
        self.linear.contains_key(v)
    }

    /// Variables in insertion order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.linear.keys()
    }

    /// Linear terms in insertion order.
    pub fn linear(&self) -> impl Iterator<Item = (&Variable, f64)> + '_ {
        self.linear.iter().map(|(v, bias)| (v, *bias))
    }

    /// Interactions in insertion order, each in canonical orientation.
    pub fn quadratic(&self) -> impl Iterator<Item = ((&Variable, &Variable), f64)> + '_ {
        self.quadratic.iter().map(|((u, v), bias)| ((u, v), *bias))
    }

    pub fn get_linear(&self, v: &Variable) -> Option<f64> {
        self.linear.get(v).copied()
    }

    /// Looks up an interaction in either orientation.
    pub fn get_quadratic(&self, u: &Variable, v: &Variable) -> Option<f64> {
        let key = canonical_pair(u.clone(), v.clone());
        self.quadratic.get(&key).copied()
    }

    /// Sets the linear bias of `v`, adding the variable if needed.
    pub fn set_linear(&mut self, v: impl Into<Variable>, bias: f64) {
        self.linear.insert(v.into(), bias);
    }

    /// Adds `bias` to the linear bias of `v`, adding the variable if needed.
    pub fn add_linear(&mut self, v: impl Into<Variable>, bias: f64) {
        *self.linear.entry(v.into()).or_insert(0.0) += bias;
    }

    /// Sets the interaction bias of `{u, v}`.
    pub fn set_quadratic(
        &mut self,
        u: impl Into<Variable>,
        v: impl Into<Variable>,
        bias: f64,
    ) -> Result<(), BqmError> {
        let key = self.interaction_key(u.into(), v.into())?;
        self.quadratic.insert(key, bias);
        Ok(())
    }

    /// Adds `bias` to the interaction bias of `{u, v}`.
    pub fn add_quadratic(
        &mut self,
        u: impl Into<Variable>,
        v: impl Into<Variable>,
        bias: f64,
    ) -> Result<(), BqmError> {
        let key = self.interaction_key(u.into(), v.into())?;
        *self.quadratic.entry(key).or_insert(0.0) += bias;
        Ok(())
    }

    fn interaction_key(
        &mut self,
        u: Variable,
        v: Variable,
    ) -> Result<(Variable, Variable), BqmError> {
        if u == v {
            return Err(BqmError::SelfInteraction(u));
        }
        self.linear.entry(u.clone()).or_insert(0.0);
        self.linear.entry(v.clone()).or_insert(0.0);
        Ok(canonical_pair(u, v))
    }

    /// The same objective over `vartype`, using `s = 2x - 1`.
    ///
    /// Variable and interaction order carry over. Converting to the current
    /// vartype returns a copy.
    pub fn change_vartype(&self, vartype: Vartype) -> Self {
        let mut out = Self {
            linear: self.linear.keys().map(|v| (v.clone(), 0.0)).collect(),
            quadratic: IndexMap::with_capacity(self.quadratic.len()),
            offset: self.offset,
            vartype,
        };

        match (self.vartype, vartype) {
            (Vartype::Binary, Vartype::Spin) => {
                for (v, a) in &self.linear {
                    out.linear[v] += a / 2.0;
                    out.offset += a / 2.0;
                }
                for ((u, v), b) in &self.quadratic {
                    let j = b / 4.0;
                    out.linear[u] += j;
                    out.linear[v] += j;
                    out.offset += j;
                    out.quadratic.insert((u.clone(), v.clone()), j);
                }
            }
            (Vartype::Spin, Vartype::Binary) => {
                for (v, h) in &self.linear {
                    out.linear[v] += 2.0 * h;
                    out.offset -= h;
                }
                for ((u, v), j) in &self.quadratic {
                    out.linear[u] -= 2.0 * j;
                    out.linear[v] -= 2.0 * j;
                    out.offset += j;
                    out.quadratic.insert((u.clone(), v.clone()), 4.0 * j);
                }
            }
            _ => return self.clone(),
        }
        out
    }

    /// Objective value at `sample`.
    ///
    /// Every model variable must be assigned; extra assignments are ignored.
    /// Values are not checked against the vartype.
    pub fn energy(&self, sample: &Sample) -> Result<f64, BqmError> {
        let value = |v: &Variable| {
            sample
                .get(v)
                .map(|x| f64::from(*x))
                .ok_or_else(|| BqmError::MissingVariable(v.clone()))
        };

        let mut energy = self.offset;
        for (v, bias) in &self.linear {
            energy += bias * value(v)?;
        }
        for ((u, v), bias) in &self.quadratic {
            energy += bias * value(u)? * value(v)?;
        }
        Ok(energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: i64) -> Variable {
        Variable::Int(i)
    }

    #[test]
    fn interactions_are_orientation_free() {
        let mut bqm = BinaryQuadraticModel::new(Vartype::Binary);
        bqm.set_quadratic(1, 0, 0.7).unwrap();
        assert_eq!(bqm.get_quadratic(&v(0), &v(1)), Some(0.7));
        assert_eq!(bqm.get_quadratic(&v(1), &v(0)), Some(0.7));

        bqm.set_quadratic(0, 1, -2.0).unwrap();
        assert_eq!(bqm.num_interactions(), 1);
        assert_eq!(bqm.get_quadratic(&v(1), &v(0)), Some(-2.0));

        bqm.add_quadratic(1, 0, 0.5).unwrap();
        assert_eq!(bqm.get_quadratic(&v(0), &v(1)), Some(-1.5));
    }

    #[test]
    fn interaction_endpoints_join_linear_with_zero_bias() {
        let mut bqm = BinaryQuadraticModel::new(Vartype::Spin);
        bqm.set_linear(0, 1.0);
        bqm.set_quadratic(0, 3, 2.0).unwrap();
        assert_eq!(bqm.num_variables(), 2);
        assert_eq!(bqm.get_linear(&v(3)), Some(0.0));
        assert_eq!(bqm.get_linear(&v(0)), Some(1.0));
    }

    #[test]
    fn self_interaction_is_rejected() {
        let mut bqm = BinaryQuadraticModel::new(Vartype::Spin);
        assert_eq!(
            bqm.set_quadratic("a", "a", 1.0),
            Err(BqmError::SelfInteraction(Variable::from("a")))
        );
        assert_eq!(bqm.num_variables(), 0);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = BinaryQuadraticModel::from_terms(
            [(0, 1.0), (1, 2.0)],
            [((0, 1), 0.5)],
            -1.0,
            Vartype::Binary,
        )
        .unwrap();
        let b = BinaryQuadraticModel::from_terms(
            [(1, 2.0), (0, 1.0)],
            [((1, 0), 0.5)],
            -1.0,
            Vartype::Binary,
        )
        .unwrap();
        assert_eq!(a, b);

        let mut c = b.clone();
        c.set_offset(0.0);
        assert_ne!(a, c);
    }

    #[test]
    fn energy_sums_offset_linear_and_quadratic() {
        let bqm = BinaryQuadraticModel::from_terms(
            [(0, 1.0), (1, 2.0), (2, 3.0)],
            [((1, 2), 0.5), ((1, 0), 0.75), ((0, 2), 0.25)],
            -10.0,
            Vartype::Binary,
        )
        .unwrap();

        let sample: Sample = [(v(0), 1), (v(1), 1), (v(2), 0)].into_iter().collect();
        assert_eq!(bqm.energy(&sample).unwrap(), -10.0 + 1.0 + 2.0 + 0.75);

        let zeros: Sample = [(v(0), 0), (v(1), 0), (v(2), 0)].into_iter().collect();
        assert_eq!(bqm.energy(&zeros).unwrap(), -10.0);
    }

    #[test]
    fn change_vartype_round_trips_dyadic_biases() {
        let binary = BinaryQuadraticModel::from_terms(
            [(0, 1.0), (1, -2.0), (2, 0.5)],
            [((0, 1), 4.0), ((2, 1), -1.0)],
            -0.25,
            Vartype::Binary,
        )
        .unwrap();

        let spin = binary.change_vartype(Vartype::Spin);
        assert_eq!(spin.vartype(), Vartype::Spin);
        assert_eq!(spin.get_quadratic(&v(0), &v(1)), Some(1.0));
        assert_eq!(spin.get_quadratic(&v(1), &v(2)), Some(-0.25));
        // 1/2 + 4/4
        assert_eq!(spin.get_linear(&v(0)), Some(1.5));

        assert_eq!(spin.change_vartype(Vartype::Binary), binary);
        assert_eq!(binary.change_vartype(Vartype::Binary), binary);
    }

    #[test]
    fn change_vartype_keeps_variable_order() {
        let spin = BinaryQuadraticModel::from_terms(
            [("b", 1.0), ("a", 1.0)],
            [(("b", "a"), 0.5)],
            0.0,
            Vartype::Spin,
        )
        .unwrap();
        let binary = spin.change_vartype(Vartype::Binary);
        let order: Vec<&Variable> = binary.variables().collect();
        assert_eq!(order, vec![&Variable::from("b"), &Variable::from("a")]);
    }

    #[test]
    fn energy_requires_every_variable() {
        let bqm = BinaryQuadraticModel::from_terms(
            [(0, 1.0), (1, 1.0)],
            [((0, 1), 1.0)],
            0.0,
            Vartype::Spin,
        )
        .unwrap();
        let sample: Sample = [(v(0), 1), (v(7), -1)].into_iter().collect();
        assert_eq!(bqm.energy(&sample), Err(BqmError::MissingVariable(v(1))));
    }
}
