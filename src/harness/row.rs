//! Result rows, one per (instance, strategy) pair.
//!
//! A row knows its CSV header and how to render each of its fields; the sinks
//! take care of quoting and layout.

use crate::hamilton::graph::Vertex;
use crate::hamilton::solver::render_witness;
use crate::sat::assignment::Assignment;
use crate::strategy::Strategy;
use std::time::Duration;

/// A row the result sinks can write.
pub trait Record {
    /// Column names, in output order.
    fn header() -> &'static [&'static str];

    /// The row's fields rendered as text, in the order of [`Record::header`].
    fn fields(&self) -> Vec<String>;

    fn instance_id(&self) -> u64;

    /// Wall-clock time spent in the solve call.
    fn elapsed(&self) -> Duration;

    /// Whether the solve produced a witness (a satisfying assignment or a
    /// Hamiltonian path).
    fn witness_found(&self) -> bool;

    /// Whether the solve produced the stronger witness (a Hamiltonian cycle).
    /// SAT has only one kind of witness.
    fn strong_witness_found(&self) -> bool {
        self.witness_found()
    }
}

fn seconds(time: Duration) -> String {
    format!("{:.6}", time.as_secs_f64())
}

/// One SAT result.
#[derive(Debug, Clone, PartialEq)]
pub struct SatRow {
    pub instance_id: u64,
    pub num_vars: usize,
    pub num_clauses: usize,
    pub method: Strategy,
    pub satisfiable: bool,
    pub time: Duration,
    /// The satisfying assignment, empty when unsatisfiable.
    pub solution: Assignment,
}

impl Record for SatRow {
    fn header() -> &'static [&'static str] {
        &[
            "instance_id",
            "n_vars",
            "n_clauses",
            "method",
            "satisfiable",
            "time_seconds",
            "solution",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.instance_id.to_string(),
            self.num_vars.to_string(),
            self.num_clauses.to_string(),
            self.method.label().to_string(),
            if self.satisfiable { "S" } else { "U" }.to_string(),
            seconds(self.time),
            self.solution.to_string(),
        ]
    }

    fn instance_id(&self) -> u64 {
        self.instance_id
    }

    fn elapsed(&self) -> Duration {
        self.time
    }

    fn witness_found(&self) -> bool {
        self.satisfiable
    }
}

/// One Hamiltonian result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HamiltonRow {
    pub instance_id: u64,
    pub num_vertices: usize,
    pub num_edges: usize,
    pub path: Option<Vec<Vertex>>,
    pub cycle: Option<Vec<Vertex>>,
    pub largest_cycle: usize,
    pub algorithm: Strategy,
    pub time: Duration,
}

impl Record for HamiltonRow {
    fn header() -> &'static [&'static str] {
        &[
            "Instance_ID",
            "Num_Vertices",
            "Num_Edges",
            "Hamiltonian_Path",
            "Hamiltonian_Cycle",
            "Largest_Cycle_Size",
            "Algorithm",
            "Time",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.instance_id.to_string(),
            self.num_vertices.to_string(),
            self.num_edges.to_string(),
            render_witness(self.path.as_deref()),
            render_witness(self.cycle.as_deref()),
            self.largest_cycle.to_string(),
            self.algorithm.label().to_string(),
            seconds(self.time),
        ]
    }

    fn instance_id(&self) -> u64 {
        self.instance_id
    }

    fn elapsed(&self) -> Duration {
        self.time
    }

    fn witness_found(&self) -> bool {
        self.path.is_some()
    }

    fn strong_witness_found(&self) -> bool {
        self.cycle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sat_fields() {
        let row = SatRow {
            instance_id: 3,
            num_vars: 2,
            num_clauses: 1,
            method: Strategy::BruteForce,
            satisfiable: true,
            time: Duration::from_micros(1500),
            solution: [(1, true), (2, false)].into_iter().collect(),
        };
        assert_eq!(
            row.fields(),
            ["3", "2", "1", "BruteForce", "S", "0.001500", "{1: True, 2: False}"]
        );
        assert_eq!(row.fields().len(), SatRow::header().len());
    }

    #[test]
    fn test_unsat_fields() {
        let row = SatRow {
            instance_id: 1,
            num_vars: 1,
            num_clauses: 2,
            method: Strategy::Backtracking,
            satisfiable: false,
            time: Duration::ZERO,
            solution: Assignment::default(),
        };
        let fields = row.fields();
        assert_eq!(fields[3], "BackTracking");
        assert_eq!(fields[4], "U");
        assert_eq!(fields[6], "{}");
        assert!(!row.witness_found());
    }

    #[test]
    fn test_hamilton_fields() {
        let row = HamiltonRow {
            instance_id: 7,
            num_vertices: 4,
            num_edges: 5,
            path: Some(vec![1, 2, 3, 4]),
            cycle: None,
            largest_cycle: 3,
            algorithm: Strategy::Backtracking,
            time: Duration::from_secs(2),
        };
        assert_eq!(
            row.fields(),
            ["7", "4", "5", "[1, 2, 3, 4]", "None", "3", "BackTracking", "2.000000"]
        );
        assert!(row.witness_found());
        assert!(!row.strong_witness_found());
    }
}
