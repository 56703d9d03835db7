//! Pluggable 0/1 optimization backend.
//!
//! The exact solver formulates its model against [`MilpBackend`] rather than
//! a concrete solver API, so any MILP or constraint-programming engine that
//! can create boolean variables, post linear constraints, minimize a linear
//! objective and report optimality is substitutable without touching the
//! constraint-formulation code.
//!
//! The default implementation uses the `microlp` solver via the `good_lp`
//! crate, behind the `milp` cargo feature.

#[cfg(feature = "milp")]
use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, Solution, SolverModel,
    Variable,
};

/// Handle for a decision variable created on a backend.
pub type VarId = usize;

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Weighted sum must equal the bound.
    Eq,
    /// Weighted sum must not exceed the bound.
    Le,
    /// Weighted sum must reach the bound.
    Ge,
}

/// Outcome of a backend solve.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// An optimal assignment was found; values are indexed by [`VarId`].
    Optimal(Vec<f64>),
    /// The model is infeasible, or the backend gave up for another reason.
    Infeasible,
}

/// A 0/1 linear optimization backend.
///
/// Backends are request-scoped: one instance is built per solve and
/// consumed by [`MilpBackend::solve`]. They must never be shared across
/// concurrent packing calls.
pub trait MilpBackend {
    /// Creates a boolean decision variable and returns its handle.
    fn bool_var(&mut self, name: String) -> VarId;

    /// Posts the linear constraint `sum(coefficient * variable) cmp rhs`.
    fn constraint(&mut self, terms: Vec<(VarId, f64)>, cmp: Comparator, rhs: f64);

    /// Sets the linear objective `sum(coefficient * variable)` for minimization.
    fn minimize(&mut self, terms: Vec<(VarId, f64)>);

    /// Solves the model and reads back every variable's assigned value.
    fn solve(self: Box<Self>) -> Outcome;
}

/// Returns true if a MILP backend was compiled in.
pub fn is_available() -> bool {
    cfg!(feature = "milp")
}

/// `good_lp` backend using the bundled pure-Rust solver.
///
/// Variables, constraints and the objective are buffered and the `good_lp`
/// model is assembled at solve time, since `good_lp` fixes the objective
/// when the model is created.
#[cfg(feature = "milp")]
pub struct GoodLpBackend {
    vars: ProblemVariables,
    handles: Vec<Variable>,
    constraints: Vec<(Vec<(VarId, f64)>, Comparator, f64)>,
    objective: Vec<(VarId, f64)>,
}

#[cfg(feature = "milp")]
impl Default for GoodLpBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "milp")]
impl GoodLpBackend {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self {
            vars: ProblemVariables::new(),
            handles: Vec::new(),
            constraints: Vec::new(),
            objective: Vec::new(),
        }
    }

    fn expression(handles: &[Variable], terms: &[(VarId, f64)]) -> Expression {
        terms
            .iter()
            .map(|&(id, coefficient)| coefficient * handles[id])
            .fold(Expression::from(0.0), |acc, term| acc + term)
    }
}

#[cfg(feature = "milp")]
impl MilpBackend for GoodLpBackend {
    fn bool_var(&mut self, name: String) -> VarId {
        let handle = self.vars.add(variable().binary().name(name));
        self.handles.push(handle);
        self.handles.len() - 1
    }

    fn constraint(&mut self, terms: Vec<(VarId, f64)>, cmp: Comparator, rhs: f64) {
        self.constraints.push((terms, cmp, rhs));
    }

    fn minimize(&mut self, terms: Vec<(VarId, f64)>) {
        self.objective = terms;
    }

    fn solve(self: Box<Self>) -> Outcome {
        let Self {
            vars,
            handles,
            constraints,
            objective,
        } = *self;

        let objective = Self::expression(&handles, &objective);
        let mut model = vars.minimise(objective).using(default_solver);
        for (terms, cmp, rhs) in &constraints {
            let lhs = Self::expression(&handles, terms);
            let posted = match cmp {
                Comparator::Eq => constraint!(lhs == *rhs),
                Comparator::Le => constraint!(lhs <= *rhs),
                Comparator::Ge => constraint!(lhs >= *rhs),
            };
            model = model.with(posted);
        }

        match model.solve() {
            Ok(solution) => {
                Outcome::Optimal(handles.iter().map(|&handle| solution.value(handle)).collect())
            }
            Err(error) => {
                log::warn!("MILP backend reported no optimal solution: {error:?}");
                Outcome::Infeasible
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_availability_matches_feature() {
        assert_eq!(is_available(), cfg!(feature = "milp"));
    }

    #[test]
    #[cfg(feature = "milp")]
    fn test_trivial_model_solves() {
        // min a + b  s.t.  a + b >= 1  ->  exactly one variable set.
        let mut backend = Box::new(GoodLpBackend::new());
        let a = backend.bool_var("a".to_string());
        let b = backend.bool_var("b".to_string());
        backend.constraint(vec![(a, 1.0), (b, 1.0)], Comparator::Ge, 1.0);
        backend.minimize(vec![(a, 1.0), (b, 1.0)]);

        match backend.solve() {
            Outcome::Optimal(values) => {
                let total: f64 = values.iter().sum();
                assert!((total - 1.0).abs() < 1e-6);
            }
            Outcome::Infeasible => panic!("trivial model must be feasible"),
        }
    }

    #[test]
    #[cfg(feature = "milp")]
    fn test_infeasible_model_reports_infeasible() {
        // a <= 0 and a >= 1 cannot both hold.
        let mut backend = Box::new(GoodLpBackend::new());
        let a = backend.bool_var("a".to_string());
        backend.constraint(vec![(a, 1.0)], Comparator::Le, 0.0);
        backend.constraint(vec![(a, 1.0)], Comparator::Ge, 1.0);
        backend.minimize(vec![(a, 1.0)]);

        assert!(matches!(backend.solve(), Outcome::Infeasible));
    }
}
