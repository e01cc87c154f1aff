//! The seam between the orchestrator and the two problem engines.

use crate::error::{Error, Result};
use crate::hamilton::graph::GraphInstance;
use crate::hamilton::solver::HamiltonOutcome;
use crate::harness::row::{HamiltonRow, Record, SatRow};
use crate::sat::cnf::CnfInstance;
use crate::sat::solver::SatOutcome;
use crate::strategy::Strategy;
use crate::{hamilton, sat};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

/// Which problem a run solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// Boolean satisfiability over `p cnf` instances.
    Sat,
    /// Hamiltonian path and cycle detection over `p edge` instances.
    Hamilton,
}

impl ProblemKind {
    /// Maps the kind token of a `p` line to a problem.
    #[must_use]
    pub fn from_header(kind: &str) -> Option<Self> {
        match kind {
            "cnf" => Some(Self::Sat),
            "edge" => Some(Self::Hamilton),
            _ => None,
        }
    }

    /// Detects the problem of an instance file from its first `p` line.
    ///
    /// # Errors
    ///
    /// `Error::Io` if the file cannot be read, `Error::Config` if it has no
    /// `p` line or the first one names neither `cnf` nor `edge`.
    pub fn detect(path: &Path) -> Result<Self> {
        let reader = BufReader::new(std::fs::File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            let mut parts = line.split_whitespace();
            if parts.next() != Some("p") {
                continue;
            }
            let kind = parts.next().unwrap_or_default();
            return Self::from_header(kind).ok_or_else(|| {
                Error::Config(format!(
                    "{}: unknown instance kind 'p {kind}'",
                    path.display()
                ))
            });
        }
        Err(Error::Config(format!(
            "{}: no 'p' header line, cannot detect the problem",
            path.display()
        )))
    }
}

impl Display for ProblemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sat => write!(f, "sat"),
            Self::Hamilton => write!(f, "hamilton"),
        }
    }
}

/// A problem the orchestrator can run: how to read its instances, solve one
/// under a strategy, check the witness, and turn the outcome into a row.
pub trait Problem {
    type Instance;
    type Outcome;
    type Row: Record;

    const KIND: ProblemKind;

    /// Reads every instance from a multi-instance file, in file order.
    ///
    /// # Errors
    ///
    /// I/O and parse errors.
    fn parse_file(path: &Path) -> Result<Vec<Self::Instance>>;

    /// Solves one instance.
    ///
    /// # Errors
    ///
    /// Only for strategies without an algorithm.
    fn solve(strategy: Strategy, instance: &Self::Instance) -> Result<Self::Outcome>;

    /// Checks the outcome's witness against the instance.
    ///
    /// # Errors
    ///
    /// A description of the first broken property.
    fn verify(instance: &Self::Instance, outcome: &Self::Outcome) -> std::result::Result<(), String>;

    fn instance_id(instance: &Self::Instance) -> u64;

    fn row(
        instance: &Self::Instance,
        outcome: Self::Outcome,
        strategy: Strategy,
        elapsed: Duration,
    ) -> Self::Row;
}

/// Boolean satisfiability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sat;

impl Problem for Sat {
    type Instance = CnfInstance;
    type Outcome = SatOutcome;
    type Row = SatRow;

    const KIND: ProblemKind = ProblemKind::Sat;

    fn parse_file(path: &Path) -> Result<Vec<CnfInstance>> {
        sat::dimacs::parse_file(path)
    }

    fn solve(strategy: Strategy, instance: &CnfInstance) -> Result<SatOutcome> {
        sat::solver::solve(strategy, instance)
    }

    fn verify(instance: &CnfInstance, outcome: &SatOutcome) -> std::result::Result<(), String> {
        sat::solver::verify(instance, outcome)
    }

    fn instance_id(instance: &CnfInstance) -> u64 {
        instance.id()
    }

    fn row(
        instance: &CnfInstance,
        outcome: SatOutcome,
        strategy: Strategy,
        elapsed: Duration,
    ) -> SatRow {
        SatRow {
            instance_id: instance.id(),
            num_vars: instance.num_vars(),
            num_clauses: instance.num_clauses(),
            method: strategy,
            satisfiable: outcome.satisfiable,
            time: elapsed,
            solution: outcome.assignment,
        }
    }
}

/// Hamiltonian path and cycle detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamilton;

impl Problem for Hamilton {
    type Instance = GraphInstance;
    type Outcome = HamiltonOutcome;
    type Row = HamiltonRow;

    const KIND: ProblemKind = ProblemKind::Hamilton;

    fn parse_file(path: &Path) -> Result<Vec<GraphInstance>> {
        hamilton::parser::parse_file(path)
    }

    fn solve(strategy: Strategy, instance: &GraphInstance) -> Result<HamiltonOutcome> {
        hamilton::solver::solve(strategy, instance)
    }

    fn verify(
        instance: &GraphInstance,
        outcome: &HamiltonOutcome,
    ) -> std::result::Result<(), String> {
        hamilton::solver::verify(instance, outcome)
    }

    fn instance_id(instance: &GraphInstance) -> u64 {
        instance.id()
    }

    fn row(
        instance: &GraphInstance,
        outcome: HamiltonOutcome,
        strategy: Strategy,
        elapsed: Duration,
    ) -> HamiltonRow {
        HamiltonRow {
            instance_id: instance.id(),
            num_vertices: instance.num_vertices(),
            num_edges: instance.num_edges(),
            path: outcome.path,
            cycle: outcome.cycle,
            largest_cycle: outcome.largest_cycle,
            algorithm: strategy,
            time: elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header() {
        assert_eq!(ProblemKind::from_header("cnf"), Some(ProblemKind::Sat));
        assert_eq!(ProblemKind::from_header("edge"), Some(ProblemKind::Hamilton));
        assert_eq!(ProblemKind::from_header("col"), None);
    }

    #[test]
    fn test_detect() {
        let dir = tempfile::tempdir().unwrap();
        let graph = dir.path().join("g.txt");
        std::fs::write(&graph, "c INSTANCE 1\np edge 2 1\ne 1 2\n").unwrap();
        assert_eq!(ProblemKind::detect(&graph).unwrap(), ProblemKind::Hamilton);

        let cnf = dir.path().join("f.cnf");
        std::fs::write(&cnf, "c 1\np cnf 1 1\n1 0\n").unwrap();
        assert_eq!(ProblemKind::detect(&cnf).unwrap(), ProblemKind::Sat);

        let none = dir.path().join("empty.txt");
        std::fs::write(&none, "c nothing here\n").unwrap();
        assert!(matches!(ProblemKind::detect(&none), Err(Error::Config(_))));
    }

    #[test]
    fn test_sat_row() {
        let cnf = CnfInstance::try_new(4, 2, vec![vec![1], vec![-2]]).unwrap();
        let outcome = Sat::solve(Strategy::Backtracking, &cnf).unwrap();
        let row = Sat::row(&cnf, outcome, Strategy::Backtracking, Duration::from_millis(5));
        assert_eq!(row.instance_id, 4);
        assert_eq!(row.num_clauses, 2);
        assert!(row.satisfiable);
        assert_eq!(row.solution.to_string(), "{1: True, 2: False}");
    }

    #[test]
    fn test_hamilton_row() {
        let g = GraphInstance::try_new(2, 1..=3, [(1, 2), (2, 3), (3, 1)]).unwrap();
        let outcome = Hamilton::solve(Strategy::BruteForce, &g).unwrap();
        assert!(Hamilton::verify(&g, &outcome).is_ok());
        let row = Hamilton::row(&g, outcome, Strategy::BruteForce, Duration::ZERO);
        assert_eq!(row.cycle, Some(vec![1, 2, 3, 1]));
        assert_eq!(row.largest_cycle, 3);
        assert_eq!(row.num_edges, 3);
    }
}
