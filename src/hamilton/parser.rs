//! A parser for multi-instance graph files.
//!
//! Each instance is a `p edge <num_vertices> <num_edges>` block (see
//! [`crate::input`]); its vertices are `1..=num_vertices`. Edge lines may be
//! written `e u v`, `u v` or `u,v`.

use crate::error::{Error, Result};
use crate::hamilton::graph::{GraphInstance, Vertex};
use crate::input::{read_blocks, tokens, InstanceBlock};
use log::warn;
use std::io::{self, BufRead};
use std::path::Path;

/// Parses every graph instance from `reader`, in file order.
///
/// # Errors
///
/// `Error::Parse` for malformed edge lines, non-`edge` headers or endpoints
/// outside the vertex range; `Error::Io` if reading fails.
pub fn parse_instances<R: BufRead>(reader: R) -> Result<Vec<GraphInstance>> {
    read_blocks(reader)?.iter().map(parse_block).collect()
}

/// Parses a multi-instance graph file.
///
/// # Errors
///
/// See [`parse_instances`]; also `Error::Io` if the file cannot be opened.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<GraphInstance>> {
    let file = std::fs::File::open(path)?;
    parse_instances(io::BufReader::new(file))
}

fn parse_block(block: &InstanceBlock) -> Result<GraphInstance> {
    if block.kind != "edge" {
        return Err(Error::parse(
            block.header_line,
            format!("expected 'p edge', found 'p {}'", block.kind),
        ));
    }

    let (num_vertices, declared_edges) = block.counts;
    let num_vertices = Vertex::try_from(num_vertices)
        .map_err(|_| Error::parse(block.header_line, "too many vertices"))?;
    let mut edges = Vec::with_capacity(block.body.len());

    for (line_no, line) in &block.body {
        let mut parts = tokens(line).peekable();
        if parts.peek() == Some(&"e") {
            parts.next();
        }

        let endpoints = parts
            .map(|t| {
                t.parse::<Vertex>()
                    .map_err(|e| Error::parse(*line_no, format!("bad vertex '{t}': {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let &[u, v] = endpoints.as_slice() else {
            return Err(Error::parse(
                *line_no,
                format!("expected two endpoints, found {}", endpoints.len()),
            ));
        };

        if let Some(bad) = [u, v].into_iter().find(|&x| x == 0 || x > num_vertices) {
            return Err(Error::parse(
                *line_no,
                format!("vertex {bad} is outside 1..={num_vertices}"),
            ));
        }

        edges.push((u, v));
    }

    if edges.len() != declared_edges {
        warn!(
            "instance {}: header declares {declared_edges} edges, found {}",
            block.id,
            edges.len()
        );
    }

    GraphInstance::try_new(block.id, 1..=num_vertices, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "c INSTANCE 1\n\
                          p edge 4 5\n\
                          e 1 2\n\
                          e 1 4\n\
                          e 2 3\n\
                          e 2 4\n\
                          e 3 4\n\
                          \n\
                          c INSTANCE 3\n\
                          p edge 5 4\n\
                          1,5\n\
                          2 3\n\
                          e 3 5\n\
                          e 4 5\n";

    #[test]
    fn test_parse_sample() {
        let graphs = parse_instances(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].id(), 1);
        assert_eq!(graphs[0].vertices(), &[1, 2, 3, 4]);
        assert_eq!(graphs[0].edges()[1], (1, 4));
        assert_eq!(graphs[1].id(), 3);
        assert_eq!(graphs[1].num_vertices(), 5);
        assert_eq!(graphs[1].edges(), &[(1, 5), (2, 3), (3, 5), (4, 5)]);
    }

    #[test]
    fn test_isolated_vertices_are_kept() {
        let graphs = parse_instances(Cursor::new("p edge 3 0\n")).unwrap();
        assert_eq!(graphs[0].vertices(), &[1, 2, 3]);
        assert_eq!(graphs[0].num_edges(), 0);
    }

    #[test]
    fn test_endpoint_out_of_range() {
        let err = parse_instances(Cursor::new("p edge 2 1\ne 1 3\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse_instances(Cursor::new("p edge 3 1\ne 1 2 3\n")).unwrap_err();
        assert!(err.to_string().contains("expected two endpoints, found 3"));
    }

    #[test]
    fn test_wrong_kind() {
        let err = parse_instances(Cursor::new("p cnf 2 1\n1 2 0\n")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }
}
