//! Brute-force SAT search.
//!
//! Variables are decided in ascending order, `false` before `true`, and a
//! branch is dropped as soon as the partial assignment violates a clause. The
//! whole search shares a single `Assignment`: every failed trial is undone
//! before the next value is tried or control returns to the caller, so a
//! caller never observes a value written by an abandoned branch.

use crate::sat::assignment::Assignment;
use crate::sat::cnf::CnfInstance;
use crate::sat::literal::Variable;
use crate::sat::solver::SatOutcome;
use log::trace;

/// Solves `cnf` with one shared, explicitly undone assignment.
pub fn solve(cnf: &CnfInstance) -> SatOutcome {
    let mut assignment = Assignment::new(cnf.num_vars());

    if cnf.is_rejected_by(&assignment) {
        return SatOutcome::unsatisfiable();
    }

    if search(cnf, &mut assignment, 1) {
        SatOutcome::satisfiable(assignment)
    } else {
        SatOutcome::unsatisfiable()
    }
}

/// Tries to complete `assignment` from `var` upwards.
///
/// On success the completed assignment is left in place. On failure every
/// variable from `var` upwards is unassigned again, leaving `assignment`
/// exactly as the caller passed it.
pub(crate) fn search(cnf: &CnfInstance, assignment: &mut Assignment, var: Variable) -> bool {
    if var > cnf.num_vars() {
        return true;
    }

    for value in [false, true] {
        assignment.set(var, value);
        trace!("brute force: x{var} = {value}");

        if !cnf.is_rejected_by(assignment) && search(cnf, assignment, var + 1) {
            return true;
        }

        assignment.unassign(var);
    }

    false
}
