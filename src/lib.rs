//! Benchmarks exhaustive search strategies on two NP-complete problems:
//! Boolean satisfiability over CNF formulas, and Hamiltonian path and cycle
//! detection over undirected graphs.
//!
//! Instances are read from multi-instance files ([`input`]), solved by every
//! enabled [`strategy::Strategy`] through the [`harness`], and the timed
//! results written out one batch per strategy.

/// Errors shared across the crate.
pub mod error;

/// The Hamiltonian engine: graphs, parser, and the two searches.
pub mod hamilton;

/// Configuration, orchestration, result rows and sinks.
pub mod harness;

/// Block splitting shared by the instance parsers.
pub mod input;

/// The SAT engine: CNF model, DIMACS parser, and the two searches.
pub mod sat;

/// The closed set of search strategies.
pub mod strategy;
