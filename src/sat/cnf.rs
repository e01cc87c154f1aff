#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The SAT instance model.
//!
//! A `CnfInstance` is built once by the parser and then only ever borrowed by
//! the solvers, so it exposes no mutating methods.

use crate::error::{Error, Result};
use crate::sat::assignment::Assignment;
use crate::sat::clause::Clause;
use itertools::Itertools;
use std::fmt::Display;

/// A satisfiability problem over variables `1..=num_vars`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfInstance {
    id: u64,
    num_vars: usize,
    clauses: Vec<Clause>,
}

impl CnfInstance {
    /// Builds an instance, checking that every literal names a variable in
    /// `1..=num_vars`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInstance` when a literal is out of range.
    pub fn try_new<I, C>(id: u64, num_vars: usize, clauses: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Clause>,
    {
        let clauses = clauses.into_iter().map(Into::into).collect_vec();
        if let Some(clause) = clauses.iter().find(|c| c.max_variable() > num_vars) {
            return Err(Error::InvalidInstance {
                id,
                reason: format!(
                    "clause {clause} mentions variable {} but only {num_vars} are declared",
                    clause.max_variable()
                ),
            });
        }
        Ok(Self {
            id,
            num_vars,
            clauses,
        })
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.num_vars
    }

    #[must_use]
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// True when some clause is violated under `assignment`.
    #[must_use]
    pub fn is_rejected_by(&self, assignment: &Assignment) -> bool {
        self.iter().any(|clause| clause.is_violated(assignment))
    }

    /// True when every clause has a literal that evaluates to true.
    #[must_use]
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.iter().all(|clause| clause.is_satisfied(assignment))
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

/// DIMACS rendering, headed by the instance's comment line.
impl Display for CnfInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "c {}", self.id)?;
        writeln!(f, "p cnf {} {}", self.num_vars, self.clauses.len())?;
        for clause in &self.clauses {
            writeln!(f, "{} 0", clause.iter().join(" "))?;
        }
        Ok(())
    }
}
