//! Seeded random instance generation.
//!
//! Generated instances are written in the same multi-instance format the
//! parsers read, so a generated file can be fed straight back into a run.

use crate::error::{Error, Result};
use crate::hamilton::graph::{GraphInstance, Vertex};
use crate::sat::cnf::CnfInstance;
use fastrand::Rng;
use std::fmt::Display;
use std::io::Write;

/// Parameters for random k-CNF instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatParams {
    pub count: usize,
    pub vars: usize,
    pub clauses: usize,
    /// Literals per clause, over distinct variables.
    pub width: usize,
    pub seed: u64,
}

/// Parameters for random graphs, each edge present with probability `density`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphParams {
    pub count: usize,
    pub vertices: usize,
    pub density: f64,
    pub seed: u64,
}

/// Generates `params.count` random k-CNF instances with ids `1..=count`.
///
/// # Errors
///
/// `Error::Config` if the clause width exceeds the number of variables or is
/// zero, or if the variable count does not fit a literal.
pub fn sat_instances(params: &SatParams) -> Result<Vec<CnfInstance>> {
    if params.width == 0 || params.width > params.vars {
        return Err(Error::Config(format!(
            "clause width {} must be between 1 and the variable count {}",
            params.width, params.vars
        )));
    }
    let vars = i32::try_from(params.vars)
        .map_err(|_| Error::Config(format!("too many variables: {}", params.vars)))?;

    let mut rng = Rng::with_seed(params.seed);
    let mut pool: Vec<i32> = (1..=vars).collect();

    (1..=params.count as u64)
        .map(|id| {
            let clauses: Vec<Vec<i32>> = (0..params.clauses)
                .map(|_| {
                    rng.shuffle(&mut pool);
                    pool[..params.width]
                        .iter()
                        .map(|&v| if rng.bool() { v } else { -v })
                        .collect()
                })
                .collect();
            CnfInstance::try_new(id, params.vars, clauses)
        })
        .collect()
}

/// Generates `params.count` random graphs on vertices `1..=vertices`.
///
/// # Errors
///
/// `Error::Config` if `density` is outside `[0, 1]` or the vertex count does
/// not fit a vertex id.
pub fn graph_instances(params: &GraphParams) -> Result<Vec<GraphInstance>> {
    if !(0.0..=1.0).contains(&params.density) {
        return Err(Error::Config(format!(
            "edge density {} must be between 0 and 1",
            params.density
        )));
    }
    let n = Vertex::try_from(params.vertices)
        .map_err(|_| Error::Config(format!("too many vertices: {}", params.vertices)))?;

    let mut rng = Rng::with_seed(params.seed);

    (1..=params.count as u64)
        .map(|id| {
            let mut edges = Vec::new();
            for u in 1..=n {
                for v in u + 1..=n {
                    if rng.f64() < params.density {
                        edges.push((u, v));
                    }
                }
            }
            GraphInstance::try_new(id, 1..=n, edges)
        })
        .collect()
}

/// Writes `instances` one after another, separated by blank lines.
///
/// # Errors
///
/// `Error::Io` if writing fails.
pub fn write_instances<T: Display>(mut out: impl Write, instances: &[T]) -> Result<()> {
    for (i, instance) in instances.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{instance}")?;
    }
    out.flush()?;
    Ok(())
}
