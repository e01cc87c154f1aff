#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for multi-instance CNF files.
//!
//! Each instance is a `p cnf <num_vars> <num_clauses>` block (see
//! [`crate::input`] for the shared outer layout). Each body line is one
//! clause: literals separated by commas and/or whitespace, optionally
//! terminated by a DIMACS `0`. Every `0` closes a clause, so `1 0 -1 0` on one
//! line is two clauses; literals left after the last `0` form one more.
//!
//! - A literal whose magnitude exceeds the declared variable count is an error.
//! - A clause count that disagrees with the header is only logged, since
//!   hand-written instance files frequently get it wrong.

use crate::error::{Error, Result};
use crate::input::{read_blocks, tokens, InstanceBlock};
use crate::sat::cnf::CnfInstance;
use log::warn;
use std::io::{self, BufRead};
use std::path::Path;

/// Parses every SAT instance from `reader`, in file order.
///
/// # Errors
///
/// `Error::Parse` for malformed lines, non-`cnf` headers or literals out of
/// range; `Error::Io` if reading fails.
pub fn parse_instances<R: BufRead>(reader: R) -> Result<Vec<CnfInstance>> {
    read_blocks(reader)?.iter().map(parse_block).collect()
}

/// Parses a multi-instance CNF file.
///
/// # Errors
///
/// See [`parse_instances`]; also `Error::Io` if the file cannot be opened.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<CnfInstance>> {
    let file = std::fs::File::open(path)?;
    parse_instances(io::BufReader::new(file))
}

fn parse_block(block: &InstanceBlock) -> Result<CnfInstance> {
    if block.kind != "cnf" {
        return Err(Error::parse(
            block.header_line,
            format!("expected 'p cnf', found 'p {}'", block.kind),
        ));
    }

    let (num_vars, declared_clauses) = block.counts;
    let mut clauses = Vec::with_capacity(block.body.len());

    for (line_no, line) in &block.body {
        let mut clause = Vec::new();
        let mut open = true;
        for token in tokens(line) {
            let lit = token
                .parse::<i32>()
                .map_err(|e| Error::parse(*line_no, format!("bad literal '{token}': {e}")))?;
            if lit == 0 {
                clauses.push(std::mem::take(&mut clause));
                open = false;
                continue;
            }
            if lit.unsigned_abs() as usize > num_vars {
                return Err(Error::parse(
                    *line_no,
                    format!("literal {lit} is outside 1..={num_vars}"),
                ));
            }
            clause.push(lit);
            open = true;
        }
        if open {
            clauses.push(clause);
        }
    }

    if clauses.len() != declared_clauses {
        warn!(
            "instance {}: header declares {declared_clauses} clauses, found {}",
            block.id,
            clauses.len()
        );
    }

    CnfInstance::try_new(block.id, num_vars, clauses)
}
