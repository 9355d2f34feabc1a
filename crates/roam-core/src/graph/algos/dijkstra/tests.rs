use super::*;
use crate::graph::gen::{generate, GenOptions};
use crate::graph::matrix::DenseGraph;

/// Brute-force oracle: relax every edge `order` times (Bellman-Ford
/// without early exit). Valid for the non-negative weights used here.
fn brute_force_distances(graph: &DenseGraph, source: usize) -> Vec<f64> {
    let n = graph.order();
    let mut dist = vec![f64::INFINITY; n];
    dist[source] = 0.0;

    for _ in 0..n {
        for u in 0..n {
            if dist[u].is_infinite() {
                continue;
            }
            for v in 0..n {
                let w = graph.weight(u, v);
                if w > 0.0 && dist[u] + w < dist[v] {
                    dist[v] = dist[u] + w;
                }
            }
        }
    }

    dist
}

#[test]
fn test_line_graph_distances() {
    // 0 -1.5- 1 -2.2- 2 -3.1- 3
    let g = DenseGraph::parse(
        "4\n\
         0 1.5 0 0\n\
         1.5 0 2.2 0\n\
         0 2.2 0 3.1\n\
         0 0 3.1 0\n",
    )
    .unwrap();

    let distances = shortest_paths(&g, 0).unwrap();
    let expected = [0.0, 1.5, 3.7, 6.8];
    for (got, want) in distances.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "got {:?}", distances);
    }
}

#[test]
fn test_source_distance_is_zero() {
    let g = DenseGraph::parse("2\n0 4\n4 0\n").unwrap();
    let distances = shortest_paths(&g, 1).unwrap();
    assert_eq!(distances[1], 0.0);
    assert_eq!(distances[0], 4.0);
}

#[test]
fn test_unreachable_vertices_stay_infinite() {
    // Two components: {0, 1} and {2}
    let g = DenseGraph::parse("3\n0 2 0\n2 0 0\n0 0 0\n").unwrap();
    let distances = shortest_paths(&g, 0).unwrap();
    assert_eq!(distances[0], 0.0);
    assert_eq!(distances[1], 2.0);
    assert!(distances[2].is_infinite());
}

#[test]
fn test_prefers_cheaper_indirect_route() {
    // Direct 0-2 edge costs 10, the detour through 1 costs 3
    let g = DenseGraph::parse(
        "3\n\
         0 1 10\n\
         1 0 2\n\
         10 2 0\n",
    )
    .unwrap();
    let distances = shortest_paths(&g, 0).unwrap();
    assert_eq!(distances[2], 3.0);
}

#[test]
fn test_out_of_range_source() {
    let g = DenseGraph::parse("2\n0 1\n1 0\n").unwrap();
    assert!(matches!(
        shortest_paths(&g, 2),
        Err(RoamError::VertexOutOfRange { vertex: 2, order: 2 })
    ));
}

#[test]
fn test_empty_graph() {
    let g = DenseGraph::parse("0\n").unwrap();
    assert!(shortest_paths(&g, 0).is_err());
}

#[test]
fn test_single_vertex() {
    let g = DenseGraph::parse("1\n0\n").unwrap();
    let distances = shortest_paths(&g, 0).unwrap();
    assert_eq!(distances, vec![0.0]);
}

#[test]
fn test_matches_brute_force_on_random_graphs() {
    for seed in 0..8 {
        let g = generate(&GenOptions {
            order: 20,
            max_weight: 9.0,
            edge_probability: 0.4,
            seed,
        })
        .unwrap();

        for source in [0, 7, 19] {
            let fast = shortest_paths(&g, source).unwrap();
            let slow = brute_force_distances(&g, source);
            for (v, (got, want)) in fast.iter().zip(&slow).enumerate() {
                if want.is_infinite() {
                    assert!(got.is_infinite(), "seed {} vertex {}", seed, v);
                } else {
                    assert!(
                        (got - want).abs() < 1e-9,
                        "seed {} vertex {}: {} vs {}",
                        seed,
                        v,
                        got,
                        want
                    );
                }
            }
        }
    }
}
