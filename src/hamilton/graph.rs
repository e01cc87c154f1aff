#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The graph instance model and the dense adjacency view the searches use.

use crate::error::{Error, Result};
use bit_vec::BitVec;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt::Display;

pub type Vertex = u32;

/// An undirected graph. Vertices are kept sorted ascending, which is the
/// canonical order every search enumerates in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInstance {
    id: u64,
    vertices: Vec<Vertex>,
    edges: Vec<(Vertex, Vertex)>,
}

impl GraphInstance {
    /// Builds a graph instance. Duplicate vertices collapse.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInstance` when an edge endpoint is not a vertex.
    pub fn try_new(
        id: u64,
        vertices: impl IntoIterator<Item = Vertex>,
        edges: impl IntoIterator<Item = (Vertex, Vertex)>,
    ) -> Result<Self> {
        let vertices = vertices.into_iter().sorted_unstable().dedup().collect_vec();
        let edges = edges.into_iter().collect_vec();

        if let Some(&(u, v)) = edges
            .iter()
            .find(|&&(u, v)| vertices.binary_search(&u).is_err() || vertices.binary_search(&v).is_err())
        {
            return Err(Error::InvalidInstance {
                id,
                reason: format!("edge ({u}, {v}) has an endpoint outside the vertex set"),
            });
        }

        Ok(Self {
            id,
            vertices,
            edges,
        })
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Vertices in ascending order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn edges(&self) -> &[(Vertex, Vertex)] {
        &self.edges
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::new(self)
    }
}

/// Edge-list rendering, headed by the instance's comment line.
impl Display for GraphInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "c {}", self.id)?;
        writeln!(f, "p edge {} {}", self.vertices.len(), self.edges.len())?;
        for (u, v) in &self.edges {
            writeln!(f, "e {u} {v}")?;
        }
        Ok(())
    }
}

/// Dense, index-based adjacency of a graph.
///
/// Index `i` stands for the `i`-th smallest vertex, so ascending index order
/// is ascending vertex order. Self-loops are dropped; they can never join two
/// consecutive vertices of a path.
#[derive(Debug, Clone)]
pub struct Adjacency {
    vertices: Vec<Vertex>,
    matrix: Vec<BitVec>,
    neighbours: Vec<SmallVec<[usize; 8]>>,
}

impl Adjacency {
    fn new(graph: &GraphInstance) -> Self {
        let n = graph.vertices.len();
        let index: FxHashMap<Vertex, usize> = graph
            .vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();

        let mut matrix = vec![BitVec::from_elem(n, false); n];
        for &(u, v) in &graph.edges {
            let (Some(&a), Some(&b)) = (index.get(&u), index.get(&v)) else {
                continue;
            };
            if a != b {
                matrix[a].set(b, true);
                matrix[b].set(a, true);
            }
        }

        let neighbours = matrix
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(j, adjacent)| adjacent.then_some(j))
                    .collect()
            })
            .collect();

        Self {
            vertices: graph.vertices.clone(),
            matrix,
            neighbours,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.matrix[a].get(b).unwrap_or(false)
    }

    /// Neighbours of `a` in ascending order.
    pub fn neighbours(&self, a: usize) -> &[usize] {
        &self.neighbours[a]
    }

    pub fn vertex(&self, a: usize) -> Vertex {
        self.vertices[a]
    }

    /// Maps a sequence of indices back to vertex ids.
    pub fn to_vertices(&self, indices: &[usize]) -> Vec<Vertex> {
        indices.iter().map(|&i| self.vertices[i]).collect()
    }

    /// Length of the longest prefix of `order` that is a path.
    pub fn path_prefix_len(&self, order: &[usize]) -> usize {
        if order.is_empty() {
            return 0;
        }
        1 + order
            .iter()
            .tuple_windows()
            .take_while(|&(&a, &b)| self.connected(a, b))
            .count()
    }
}
