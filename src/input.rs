#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Splitting of multi-instance input files into per-instance blocks.
//!
//! Both problem formats share the same outer layout, a DIMACS-like stream of
//! instances:
//!
//! ```text
//! c 1 3 ?
//! p cnf 4 5
//! 1,2
//! ...
//! c INSTANCE 2
//! p edge 4 5
//! e 1 2
//! ...
//! ```
//!
//! - `c` lines before a `p` line name the next instance. The first integer
//!   token of the last such line that has one is the instance id; otherwise
//!   ids are assigned sequentially from 1. A `c` line followed by more body
//!   lines is a plain comment.
//! - A `p <kind> <a> <b>` line is the instance header and closes the previous
//!   instance.
//! - Every other non-blank line belongs to the body of the current instance.
//! - A `%` line ends the input.
//!
//! Repeated ids are kept but logged, since result rows are keyed by them.
//!
//! The SAT and graph parsers interpret the blocks produced here.

use crate::error::{Error, Result};
use log::warn;
use rustc_hash::FxHashSet;
use std::io::BufRead;

/// One instance's worth of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceBlock {
    pub id: u64,
    /// Second token of the `p` line, e.g. `cnf` or `edge`.
    pub kind: String,
    /// The two counts of the `p` line.
    pub counts: (usize, usize),
    /// 1-based line number of the `p` line.
    pub header_line: usize,
    /// Body lines with their 1-based line numbers.
    pub body: Vec<(usize, String)>,
}

/// Splits a body line into tokens on commas and whitespace.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// Reads every instance block from `reader`.
///
/// # Errors
///
/// `Error::Io` if reading fails, `Error::Parse` for a malformed `p` line or
/// for data that precedes any `p` line.
pub fn read_blocks<R: BufRead>(reader: R) -> Result<Vec<InstanceBlock>> {
    let mut blocks: Vec<InstanceBlock> = Vec::new();
    let mut current: Option<InstanceBlock> = None;
    let mut pending_id: Option<u64> = None;
    let mut seen: FxHashSet<u64> = FxHashSet::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();

        let mut parts = trimmed.split_whitespace();
        match parts.next() {
            None => {}
            Some("%") => break,
            Some("c") => {
                if let Some(id) = parts.find_map(|t| t.parse::<u64>().ok()) {
                    pending_id = Some(id);
                }
            }
            Some("p") => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                let kind = parts
                    .next()
                    .ok_or_else(|| Error::parse(line_no, "problem line is missing its kind"))?
                    .to_ascii_lowercase();
                let mut count = |what: &str| -> Result<usize> {
                    parts
                        .next()
                        .ok_or_else(|| Error::parse(line_no, format!("problem line is missing {what}")))?
                        .parse::<usize>()
                        .map_err(|e| Error::parse(line_no, format!("bad {what}: {e}")))
                };
                let first = count("the first count")?;
                let second = count("the second count")?;

                let next_id = blocks.len() as u64 + 1;
                let id = pending_id.take().unwrap_or(next_id);
                if !seen.insert(id) {
                    warn!("line {line_no}: instance id {id} is used more than once");
                }
                current = Some(InstanceBlock {
                    id,
                    kind,
                    counts: (first, second),
                    header_line: line_no,
                    body: Vec::new(),
                });
            }
            Some(_) => match current.as_mut() {
                Some(block) => {
                    pending_id = None;
                    block.body.push((line_no, trimmed.to_string()));
                }
                None => {
                    return Err(Error::parse(
                        line_no,
                        format!("'{trimmed}' appears before any problem line"),
                    ));
                }
            },
        }
    }

    if let Some(block) = current.take() {
        blocks.push(block);
    }

    Ok(blocks)
}
