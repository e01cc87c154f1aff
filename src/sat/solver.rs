use crate::error::{Error, Result};
use crate::sat::assignment::Assignment;
use crate::sat::cnf::CnfInstance;
use crate::sat::{backtracking, brute_force};
use crate::strategy::Strategy;

/// Result of one SAT solve call.
///
/// When `satisfiable` is false the assignment is the empty mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SatOutcome {
    pub satisfiable: bool,
    pub assignment: Assignment,
}

impl SatOutcome {
    #[must_use]
    pub const fn satisfiable(assignment: Assignment) -> Self {
        Self {
            satisfiable: true,
            assignment,
        }
    }

    #[must_use]
    pub fn unsatisfiable() -> Self {
        Self::default()
    }
}

/// Solves `cnf` with the given strategy.
///
/// # Errors
///
/// `Error::StrategyUnavailable` for the reserved `simple` and `best_case`
/// slots. The implemented strategies never fail.
pub fn solve(strategy: Strategy, cnf: &CnfInstance) -> Result<SatOutcome> {
    match strategy {
        Strategy::BruteForce => Ok(brute_force::solve(cnf)),
        Strategy::Backtracking => Ok(backtracking::solve(cnf)),
        Strategy::Simple | Strategy::BestCase => Err(Error::StrategyUnavailable(strategy)),
    }
}

/// Checks that `outcome` is a genuine witness for `cnf`.
///
/// # Errors
///
/// A description of the first broken property.
pub fn verify(cnf: &CnfInstance, outcome: &SatOutcome) -> std::result::Result<(), String> {
    if !outcome.satisfiable {
        return if outcome.assignment.is_empty() {
            Ok(())
        } else {
            Err("unsatisfiable result carries a non-empty assignment".to_string())
        };
    }

    if outcome.assignment.num_vars() != cnf.num_vars() || !outcome.assignment.is_complete() {
        return Err(format!(
            "assignment {} does not cover all {} variables",
            outcome.assignment,
            cnf.num_vars()
        ));
    }

    match cnf.iter().find(|clause| !clause.is_satisfied(&outcome.assignment)) {
        Some(clause) => Err(format!("clause {clause} is not satisfied")),
        None => Ok(()),
    }
}
