//! Backtracking Hamiltonian search.
//!
//! A vertex sequence is grown depth first from a start vertex, only ever
//! extending to an unvisited neighbour of the last vertex, neighbours taken in
//! ascending id order. A branch is abandoned as soon as it cannot be extended.
//! Start vertices are tried lowest id first, so simple paths are visited in
//! the same lexicographic order the brute-force search enumerates orderings
//! in, and both searches report identical results.

use crate::hamilton::graph::{Adjacency, GraphInstance};
use crate::hamilton::solver::HamiltonOutcome;
use bit_vec::BitVec;
use log::trace;

struct Search<'a> {
    adj: &'a Adjacency,
    visited: BitVec,
    sequence: Vec<usize>,
    first_path: Option<Vec<usize>>,
    largest_cycle: usize,
}

impl Search<'_> {
    fn visit(&mut self, v: usize) {
        self.visited.set(v, true);
        self.sequence.push(v);
    }

    fn leave(&mut self) {
        if let Some(v) = self.sequence.pop() {
            self.visited.set(v, false);
        }
    }

    /// Extends the current sequence. Returns the Hamiltonian cycle (as its
    /// path) once one is found.
    fn extend(&mut self) -> Option<Vec<usize>> {
        let (Some(&start), Some(&last)) = (self.sequence.first(), self.sequence.last()) else {
            return None;
        };
        let len = self.sequence.len();
        let closes = len >= 3 && self.adj.connected(last, start);

        if closes {
            self.largest_cycle = self.largest_cycle.max(len);
        }

        if len == self.adj.len() {
            if closes {
                trace!("backtracking: Hamiltonian cycle {:?}", self.sequence);
                return Some(self.sequence.clone());
            }
            if self.first_path.is_none() {
                trace!("backtracking: first Hamiltonian path {:?}", self.sequence);
                self.first_path = Some(self.sequence.clone());
            }
            return None;
        }

        let adj = self.adj;
        for &next in adj.neighbours(last) {
            if self.visited.get(next).unwrap_or(true) {
                continue;
            }
            self.visit(next);
            if let Some(cycle) = self.extend() {
                return Some(cycle);
            }
            self.leave();
        }

        None
    }
}

pub fn solve(graph: &GraphInstance) -> HamiltonOutcome {
    let adj = graph.adjacency();
    let n = adj.len();

    if n == 0 {
        return HamiltonOutcome::trivial();
    }

    let mut search = Search {
        adj: &adj,
        visited: BitVec::from_elem(n, false),
        sequence: Vec::with_capacity(n),
        first_path: None,
        largest_cycle: 0,
    };

    for start in 0..n {
        search.visit(start);
        if let Some(cycle) = search.extend() {
            return HamiltonOutcome::with_cycle(adj.to_vertices(&cycle));
        }
        search.leave();
    }

    HamiltonOutcome {
        path: search.first_path.map(|order| adj.to_vertices(&order)),
        cycle: None,
        largest_cycle: search.largest_cycle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamilton::brute_force;

    fn graph(n: u32, edges: &[(u32, u32)]) -> GraphInstance {
        GraphInstance::try_new(1, 1..=n, edges.iter().copied()).unwrap()
    }

    #[test]
    fn test_square_with_diagonal() {
        let outcome = solve(&graph(4, &[(1, 2), (1, 4), (2, 3), (2, 4), (3, 4)]));
        assert_eq!(outcome.path, Some(vec![1, 2, 3, 4]));
        assert_eq!(outcome.cycle, Some(vec![1, 2, 3, 4, 1]));
        assert_eq!(outcome.largest_cycle, 4);
    }

    #[test]
    fn test_star_has_nothing() {
        let outcome = solve(&graph(5, &[(1, 5), (2, 3), (3, 5), (4, 5)]));
        assert!(!outcome.path_exists());
        assert!(!outcome.cycle_exists());
        assert_eq!(outcome.largest_cycle, 0);
    }

    #[test]
    fn test_path_not_starting_at_lowest_vertex() {
        let outcome = solve(&graph(3, &[(1, 2), (1, 3)]));
        assert_eq!(outcome.path, Some(vec![2, 1, 3]));
        assert!(!outcome.cycle_exists());
    }

    #[test]
    fn test_cycle_not_through_lowest_vertex() {
        // 1 hangs off a square 2-3-4-5.
        let g = graph(5, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 2)]);
        let outcome = solve(&g);
        assert_eq!(outcome.largest_cycle, 4);
        assert_eq!(outcome.path, Some(vec![1, 2, 3, 4, 5]));
        assert_eq!(outcome, brute_force::solve(&g));
    }

    #[test]
    fn test_sparse_vertex_ids() {
        let g = GraphInstance::try_new(4, [10, 20, 30], [(30, 10), (10, 20), (20, 30)]).unwrap();
        let outcome = solve(&g);
        assert_eq!(outcome.cycle, Some(vec![10, 20, 30, 10]));
        assert_eq!(outcome, brute_force::solve(&g));
    }

    #[test]
    fn test_petersen_graph() {
        // The Petersen graph has Hamiltonian paths but no Hamiltonian cycle.
        let g = graph(
            10,
            &[
                (1, 2), (2, 3), (3, 4), (4, 5), (5, 1),
                (1, 6), (2, 7), (3, 8), (4, 9), (5, 10),
                (6, 8), (8, 10), (10, 7), (7, 9), (9, 6),
            ],
        );
        let outcome = solve(&g);
        assert!(outcome.path_exists());
        assert!(!outcome.cycle_exists());
        assert_eq!(outcome.largest_cycle, 9);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(solve(&graph(1, &[])).path, Some(vec![1]));
        let empty = GraphInstance::try_new(1, [], []).unwrap();
        assert_eq!(solve(&empty), HamiltonOutcome::trivial());
    }
}
