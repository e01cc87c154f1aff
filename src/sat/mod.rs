#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod assignment;
pub mod backtracking;
pub mod brute_force;
pub mod clause;
pub mod cnf;
pub mod dimacs;
pub mod literal;
pub mod solver;
