//! Greedy nearest-neighbor tour construction

use crate::error::{Result, RoamError};
use crate::graph::provider::Graph;
use crate::graph::types::Tour;

/// Build a tour by repeatedly walking the cheapest edge to an unvisited
/// vertex, starting from `start`.
///
/// Ties on edge weight go to the lowest vertex index. The walk stops when
/// no unvisited neighbor remains; if the final vertex has an edge back to
/// the start, the tour is closed by appending the start vertex. A start
/// with no outgoing edges yields a single-vertex open tour. No optimality
/// is claimed.
#[tracing::instrument(skip(graph), fields(order = graph.order()))]
pub fn greedy_tour(graph: &impl Graph, start: usize) -> Result<Tour> {
    let n = graph.order();
    if start >= n {
        return Err(RoamError::VertexOutOfRange { vertex: start, order: n });
    }

    let mut visited = vec![false; n];
    let mut vertices = Vec::with_capacity(n + 1);
    visited[start] = true;
    vertices.push(start);

    let mut current = start;
    loop {
        let mut nearest: Option<(usize, f64)> = None;
        for v in 0..n {
            if visited[v] {
                continue;
            }
            let weight = graph.weight(current, v);
            // Strict < keeps the first-encountered index on ties.
            if weight > 0.0 && nearest.map_or(true, |(_, best)| weight < best) {
                nearest = Some((v, weight));
            }
        }

        match nearest {
            Some((v, weight)) => {
                tracing::trace!(vertex = v, weight, "advance");
                visited[v] = true;
                vertices.push(v);
                current = v;
            }
            None => break,
        }
    }

    let closed = current != start && graph.weight(current, start) > 0.0;
    if closed {
        vertices.push(start);
    }

    Ok(Tour { vertices, closed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::matrix::DenseGraph;

    #[test]
    fn test_follows_unique_cheapest_edges() {
        // Each vertex's cheapest edge leads to its successor, and the last
        // vertex connects back to the start.
        let g = DenseGraph::parse(
            "4\n\
             0 1 5 2\n\
             1 0 1 5\n\
             5 1 0 1\n\
             2 5 1 0\n",
        )
        .unwrap();

        let tour = greedy_tour(&g, 0).unwrap();
        assert_eq!(tour.vertices, vec![0, 1, 2, 3, 0]);
        assert!(tour.closed);
        assert_eq!(tour.length(&g), 5.0);
    }

    #[test]
    fn test_open_when_no_return_edge() {
        // 0 - 1 - 2 path, no edge 2-0
        let g = DenseGraph::parse("3\n0 1 0\n1 0 2\n0 2 0\n").unwrap();
        let tour = greedy_tour(&g, 0).unwrap();
        assert_eq!(tour.vertices, vec![0, 1, 2]);
        assert!(!tour.closed);
    }

    #[test]
    fn test_isolated_start() {
        let g = DenseGraph::parse("3\n0 0 0\n0 0 1\n0 1 0\n").unwrap();
        let tour = greedy_tour(&g, 0).unwrap();
        assert_eq!(tour.vertices, vec![0]);
        assert!(!tour.closed);
    }

    #[test]
    fn test_ties_break_to_lowest_index() {
        // From 0 both 1 and 2 cost 3.0; 1 must win.
        let g = DenseGraph::parse(
            "3\n\
             0 3 3\n\
             3 0 0\n\
             3 0 0\n",
        )
        .unwrap();
        let tour = greedy_tour(&g, 0).unwrap();
        assert_eq!(tour.vertices[1], 1);
    }

    #[test]
    fn test_stops_at_dead_end() {
        // Greedy gets lured to cheap vertex 2, which only connects back to
        // visited vertices; the walk ends there, leaving 3 unvisited.
        let g = DenseGraph::parse(
            "4\n\
             0 1 0 0\n\
             1 0 1 9\n\
             0 1 0 0\n\
             0 9 0 0\n",
        )
        .unwrap();
        let tour = greedy_tour(&g, 0).unwrap();
        assert_eq!(tour.vertices, vec![0, 1, 2]);
        assert!(!tour.closed);
    }

    #[test]
    fn test_single_vertex_graph() {
        let g = DenseGraph::parse("1\n0\n").unwrap();
        let tour = greedy_tour(&g, 0).unwrap();
        assert_eq!(tour.vertices, vec![0]);
        assert!(!tour.closed);
    }

    #[test]
    fn test_out_of_range_start() {
        let g = DenseGraph::parse("1\n0\n").unwrap();
        assert!(greedy_tour(&g, 3).is_err());
    }
}
