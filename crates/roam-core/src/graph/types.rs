//! Result types shared by the algorithms and the CLI

use std::path::Path;

use serde::Serialize;

use crate::error::{Result, RoamError};
use crate::graph::provider::Graph;

/// Receives vertices in visitation order during a traversal.
///
/// Traversals report each visit to a caller-supplied sink; collecting
/// into a `Vec<usize>` gives tests and callers the ordered sequence.
pub trait VisitSink {
    fn visit(&mut self, vertex: usize);
}

impl VisitSink for Vec<usize> {
    fn visit(&mut self, vertex: usize) {
        self.push(vertex);
    }
}

impl<F: FnMut(usize)> VisitSink for F {
    fn visit(&mut self, vertex: usize) {
        self(vertex);
    }
}

/// Distance vector from a single source vertex.
///
/// Unreachable vertices hold `f64::INFINITY`, which serializes as `null`
/// in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceReport {
    pub source: usize,
    pub distances: Vec<f64>,
}

impl DistanceReport {
    /// Whether `vertex` is reachable from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances[vertex].is_finite()
    }
}

/// Visitation order produced by a DFS or BFS run
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport {
    pub start: usize,
    pub visited: Vec<usize>,
}

/// An ordered walk over the graph.
///
/// When `closed` is true the final element repeats the first, making the
/// walk a cycle. The walk ends where the vector ends; there is no
/// in-band terminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    pub vertices: Vec<usize>,
    pub closed: bool,
}

impl Tour {
    /// Sum of edge weights along consecutive vertices
    pub fn length(&self, graph: &impl Graph) -> f64 {
        self.vertices
            .windows(2)
            .map(|pair| graph.weight(pair[0], pair[1]))
            .sum()
    }

    /// Parse a reference tour: whitespace-separated 1-based vertex
    /// indices terminated by a `-1` sentinel token (an `EOF` token also
    /// ends the list). Indices are converted to 0-based.
    pub fn parse(text: &str) -> Result<Self> {
        let mut vertices = Vec::new();

        for token in text.split_whitespace() {
            if token == "-1" || token.eq_ignore_ascii_case("EOF") {
                break;
            }
            let index: usize = token.parse().map_err(|_| {
                RoamError::invalid_tour(format!("bad vertex index {:?}", token))
            })?;
            if index == 0 {
                return Err(RoamError::invalid_tour(
                    "vertex indices are 1-based, got 0",
                ));
            }
            vertices.push(index - 1);
        }

        if vertices.is_empty() {
            return Err(RoamError::invalid_tour("no vertices before sentinel"));
        }

        let closed = vertices.len() > 1 && vertices.first() == vertices.last();
        Ok(Self { vertices, closed })
    }

    /// Load and parse a reference tour from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Check every vertex index against the graph's order
    pub fn validate_against(&self, graph: &impl Graph) -> Result<()> {
        let order = graph.order();
        for &v in &self.vertices {
            if v >= order {
                return Err(RoamError::VertexOutOfRange { vertex: v, order });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::matrix::DenseGraph;

    fn line_graph() -> DenseGraph {
        DenseGraph::parse("3\n0 1.5 0\n1.5 0 2.2\n0 2.2 0\n").unwrap()
    }

    #[test]
    fn test_parse_tour_with_sentinel() {
        let tour = Tour::parse("1 3 2 -1").unwrap();
        assert_eq!(tour.vertices, vec![0, 2, 1]);
        assert!(!tour.closed);
    }

    #[test]
    fn test_parse_closed_tour() {
        let tour = Tour::parse("1 2 3 1 -1").unwrap();
        assert_eq!(tour.vertices, vec![0, 1, 2, 0]);
        assert!(tour.closed);
    }

    #[test]
    fn test_parse_eof_token_ends_tour() {
        let tour = Tour::parse("2 1\nEOF\n3").unwrap();
        assert_eq!(tour.vertices, vec![1, 0]);
    }

    #[test]
    fn test_parse_rejects_zero_index() {
        let err = Tour::parse("0 1 -1").unwrap_err();
        assert!(matches!(err, RoamError::InvalidTour { .. }));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(Tour::parse("-1").is_err());
        assert!(Tour::parse("").is_err());
    }

    #[test]
    fn test_tour_length() {
        let g = line_graph();
        let tour = Tour {
            vertices: vec![0, 1, 2],
            closed: false,
        };
        assert!((tour.length(&g) - 3.7).abs() < 1e-9);
    }

    #[test]
    fn test_validate_against_order() {
        let g = line_graph();
        let tour = Tour::parse("1 4 -1").unwrap();
        assert!(matches!(
            tour.validate_against(&g),
            Err(RoamError::VertexOutOfRange { vertex: 3, order: 3 })
        ));
    }

    #[test]
    fn test_visit_sink_closure() {
        let mut seen = Vec::new();
        {
            let mut sink = |v: usize| seen.push(v * 10);
            sink.visit(3);
        }
        assert_eq!(seen, vec![30]);
    }
}
