use crate::error::{Error, Result};
use crate::hamilton::graph::{GraphInstance, Vertex};
use crate::hamilton::{backtracking, brute_force};
use crate::strategy::Strategy;
use itertools::Itertools;
use rustc_hash::FxHashSet;

/// Result of one Hamiltonian solve call.
///
/// `cycle`, when present, repeats its first vertex at the end. `path` is always
/// present when `cycle` is, and then equals the cycle without its closing
/// vertex.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HamiltonOutcome {
    pub path: Option<Vec<Vertex>>,
    pub cycle: Option<Vec<Vertex>>,
    pub largest_cycle: usize,
}

impl HamiltonOutcome {
    /// The graph without vertices: the empty sequence is a path, there is no cycle.
    #[must_use]
    pub const fn trivial() -> Self {
        Self {
            path: Some(Vec::new()),
            cycle: None,
            largest_cycle: 0,
        }
    }

    /// Outcome for a Hamiltonian cycle given as its path (without the closing vertex).
    #[must_use]
    pub fn with_cycle(path: Vec<Vertex>) -> Self {
        let mut cycle = path.clone();
        cycle.extend(path.first().copied());
        Self {
            largest_cycle: path.len(),
            path: Some(path),
            cycle: Some(cycle),
        }
    }

    #[must_use]
    pub const fn path_exists(&self) -> bool {
        self.path.is_some()
    }

    #[must_use]
    pub const fn cycle_exists(&self) -> bool {
        self.cycle.is_some()
    }
}

/// Renders a path or cycle as `[1, 2, 3]`, or `None` when absent.
#[must_use]
pub fn render_witness(witness: Option<&[Vertex]>) -> String {
    witness.map_or_else(
        || "None".to_string(),
        |vertices| format!("[{}]", vertices.iter().join(", ")),
    )
}

/// Solves `graph` with the given strategy.
///
/// # Errors
///
/// `Error::StrategyUnavailable` for the reserved `simple` and `best_case`
/// slots. The implemented strategies never fail.
pub fn solve(strategy: Strategy, graph: &GraphInstance) -> Result<HamiltonOutcome> {
    match strategy {
        Strategy::BruteForce => Ok(brute_force::solve(graph)),
        Strategy::Backtracking => Ok(backtracking::solve(graph)),
        Strategy::Simple | Strategy::BestCase => Err(Error::StrategyUnavailable(strategy)),
    }
}

fn check_hamiltonian_path(graph: &GraphInstance, path: &[Vertex]) -> std::result::Result<(), String> {
    if path.len() != graph.num_vertices() {
        return Err(format!(
            "path has {} vertices, graph has {}",
            path.len(),
            graph.num_vertices()
        ));
    }

    let mut seen = FxHashSet::default();
    if let Some(v) = path.iter().find(|&&v| !seen.insert(v)) {
        return Err(format!("vertex {v} is visited twice"));
    }
    if let Some(v) = path.iter().find(|&&v| graph.vertices().binary_search(&v).is_err()) {
        return Err(format!("vertex {v} is not in the graph"));
    }

    let edges: FxHashSet<(Vertex, Vertex)> = graph
        .edges()
        .iter()
        .flat_map(|&(u, v)| [(u, v), (v, u)])
        .collect();
    match path
        .iter()
        .tuple_windows()
        .find(|&(u, v)| !edges.contains(&(*u, *v)))
    {
        Some((u, v)) => Err(format!("no edge between {u} and {v}")),
        None => Ok(()),
    }
}

/// Checks that every witness in `outcome` is well formed for `graph`.
///
/// # Errors
///
/// A description of the first broken property.
pub fn verify(graph: &GraphInstance, outcome: &HamiltonOutcome) -> std::result::Result<(), String> {
    if let Some(path) = &outcome.path {
        check_hamiltonian_path(graph, path)?;
    }

    if let Some(cycle) = &outcome.cycle {
        let Some((last, open)) = cycle.split_last() else {
            return Err("cycle is empty".to_string());
        };
        if open.len() < 3 || open.first() != Some(last) {
            return Err(format!("{} is not a closed cycle", render_witness(Some(cycle.as_slice()))));
        }
        check_hamiltonian_path(graph, open)?;
        let closing = (open[open.len() - 1], *last);
        if !graph
            .edges()
            .iter()
            .any(|&(u, v)| (u, v) == closing || (v, u) == closing)
        {
            return Err(format!("no closing edge between {} and {}", closing.0, closing.1));
        }
        if outcome.path.as_deref() != Some(open) {
            return Err("path is not the cycle's path prefix".to_string());
        }
        if outcome.largest_cycle != open.len() {
            return Err(format!(
                "largest cycle {} differs from Hamiltonian cycle length {}",
                outcome.largest_cycle,
                open.len()
            ));
        }
    } else if outcome.largest_cycle > graph.num_vertices() {
        return Err(format!(
            "largest cycle {} exceeds the vertex count",
            outcome.largest_cycle
        ));
    }

    Ok(())
}
