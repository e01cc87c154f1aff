//! # np-bench
//!
//! `np-bench` times exhaustive search strategies on two NP-complete problems:
//! Boolean satisfiability and Hamiltonian path/cycle detection.
//!
//! ## Usage
//!
//! ```sh
//! np-bench <SUBCOMMAND> [OPTIONS]
//! ```
//!
//! ### Subcommands
//!
//! 1.  **`run`**: Solve every instance of a file with each enabled strategy and
//!     write one CSV of results per strategy.
//!     ```sh
//!     np-bench run --input data/graphs.txt --strategy brute_force,backtracking
//!     np-bench run --input data/ --problem sat --config strategies.json --stats
//!     ```
//!
//! 2.  **`generate`**: Write seeded random instances.
//!     ```sh
//!     np-bench generate sat --count 20 --vars 10 --clauses 40 --seed 1 -o sat.cnf
//!     np-bench generate graph --count 20 --vertices 8 --density 0.4 -o graphs.txt
//!     ```
//!
//! 3.  **`completions`**: Print a shell completion script.
//!
//! ### Run Options
//!
//! -   `-d, --debug`: Log at debug level (default: `info`; `RUST_LOG` overrides).
//! -   `-v, --verify`: Check every witness and fail the run on a mismatch.
//! -   `-s, --stats`: Print a per-strategy summary table.
//!
//! Any error is printed and the process exits with status 1.

use clap::Parser;
use command_line::cli::{execute, Cli};

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// figures in the statistics table.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug() { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = execute(cli) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
