#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Hamiltonian path and cycle detection.
//!
//! Both searches report the same five facts for a graph: whether a
//! Hamiltonian path exists and the first one found, whether a Hamiltonian
//! cycle exists and the first one found, and the size of the largest cycle
//! seen. "First" is with respect to lexicographic order over the ascending
//! vertex ids, so the two searches agree on every field.

pub mod backtracking;
pub mod brute_force;
pub mod graph;
pub mod parser;
pub mod solver;
