//! Backtracking SAT search.
//!
//! Same variable order, value order and pruning rule as the brute-force
//! search, but each branch works on its own copy of the partial assignment, so
//! siblings can never see each other's writes.

use crate::sat::assignment::Assignment;
use crate::sat::cnf::CnfInstance;
use crate::sat::literal::Variable;
use crate::sat::solver::SatOutcome;
use log::trace;

/// Solves `cnf`, copying the partial assignment into every branch.
pub fn solve(cnf: &CnfInstance) -> SatOutcome {
    let root = Assignment::new(cnf.num_vars());

    if cnf.is_rejected_by(&root) {
        return SatOutcome::unsatisfiable();
    }

    search(cnf, &root, 1).map_or_else(SatOutcome::unsatisfiable, SatOutcome::satisfiable)
}

fn search(cnf: &CnfInstance, assignment: &Assignment, var: Variable) -> Option<Assignment> {
    if var > cnf.num_vars() {
        return Some(assignment.clone());
    }

    for value in [false, true] {
        let mut branch = assignment.clone();
        branch.set(var, value);
        trace!("backtracking: x{var} = {value}");

        if cnf.is_rejected_by(&branch) {
            continue;
        }

        if let Some(found) = search(cnf, &branch, var + 1) {
            return Some(found);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::brute_force;

    fn cnf(n: usize, clauses: Vec<Vec<i32>>) -> CnfInstance {
        CnfInstance::try_new(1, n, clauses).unwrap()
    }

    #[test]
    fn test_satisfiable_scenario() {
        let cnf = cnf(4, vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![2, 4], vec![3, 4]]);
        let outcome = solve(&cnf);
        assert!(outcome.satisfiable);
        assert!(cnf.is_satisfied_by(&outcome.assignment));
        assert_eq!(outcome, brute_force::solve(&cnf));
    }

    #[test]
    fn test_unsat_scenario() {
        let outcome = solve(&cnf(1, vec![vec![1], vec![-1]]));
        assert!(!outcome.satisfiable);
        assert_eq!(outcome.assignment.to_string(), "{}");
    }

    #[test]
    fn test_pigeonhole_three_into_two_is_unsat() {
        // p(i, h) = 2 * (i - 1) + h for pigeon i in 1..=3, hole h in 1..=2.
        let p = |i: i32, h: i32| 2 * (i - 1) + h;
        let mut clauses = Vec::new();
        for i in 1..=3 {
            clauses.push(vec![p(i, 1), p(i, 2)]);
        }
        for h in 1..=2 {
            for i in 1..=3 {
                for j in (i + 1)..=3 {
                    clauses.push(vec![-p(i, h), -p(j, h)]);
                }
            }
        }
        let cnf = cnf(6, clauses);
        assert!(!solve(&cnf).satisfiable);
        assert!(!brute_force::solve(&cnf).satisfiable);
    }

    #[test]
    fn test_solving_twice_is_idempotent() {
        let cnf = cnf(3, vec![vec![-1, -2], vec![2, 3], vec![-3, 1]]);
        let snapshot = cnf.clone();
        let first = solve(&cnf);
        let second = solve(&cnf);
        assert_eq!(first, second);
        assert_eq!(cnf, snapshot);
    }
}
