//! Brute-force Hamiltonian search.
//!
//! Every ordering of the vertices is generated in lexicographic order over the
//! ascending vertex ids and tested as a whole. The first ordering that closes
//! into a cycle ends the search. Until then the first ordering that is a path
//! is remembered, and every ordering's path prefix is scanned for cycles back
//! to its first vertex to find the largest cycle in the graph.

use crate::hamilton::graph::{Adjacency, GraphInstance};
use crate::hamilton::solver::HamiltonOutcome;
use itertools::Itertools;
use log::trace;

pub fn solve(graph: &GraphInstance) -> HamiltonOutcome {
    let adj = graph.adjacency();
    let n = adj.len();

    if n == 0 {
        return HamiltonOutcome::trivial();
    }

    let mut first_path: Option<Vec<usize>> = None;
    let mut largest_cycle = 0;

    for order in (0..n).permutations(n) {
        let prefix = adj.path_prefix_len(&order);
        let closing = largest_closing_prefix(&adj, &order, prefix);
        largest_cycle = largest_cycle.max(closing);

        if prefix < n {
            continue;
        }

        if closing == n {
            trace!("brute force: Hamiltonian cycle {order:?}");
            return HamiltonOutcome::with_cycle(adj.to_vertices(&order));
        }

        if first_path.is_none() {
            trace!("brute force: first Hamiltonian path {order:?}");
            first_path = Some(order);
        }
    }

    HamiltonOutcome {
        path: first_path.map(|order| adj.to_vertices(&order)),
        cycle: None,
        largest_cycle,
    }
}

/// Largest `k >= 3` such that the first `k` vertices of `order` form a path
/// whose last vertex is adjacent to its first, or 0.
fn largest_closing_prefix(adj: &Adjacency, order: &[usize], prefix: usize) -> usize {
    (3..=prefix)
        .rev()
        .find(|&k| adj.connected(order[k - 1], order[0]))
        .unwrap_or(0)
}
