//! The benchmark harness: configuration, the solve orchestrator, result rows
//! and sinks, batch summaries and instance generation.
//!
//! Both problem engines plug in through [`problem::Problem`], so everything in
//! here is written once and shared by SAT and Hamiltonian runs.

pub mod config;
pub mod generate;
pub mod orchestrator;
pub mod problem;
pub mod row;
pub mod sink;
pub mod summary;
