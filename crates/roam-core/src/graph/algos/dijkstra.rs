//! Single-source shortest paths (Dijkstra)

use crate::error::{Result, RoamError};
use crate::graph::heap::IndexedMinHeap;
use crate::graph::provider::Graph;

/// Compute shortest-path distances from `source` to every vertex.
///
/// Edge weights must be non-negative; `DenseGraph` construction enforces
/// this, custom `Graph` impls must uphold it themselves. Unreachable
/// vertices come back as `f64::INFINITY`.
#[tracing::instrument(skip(graph), fields(order = graph.order()))]
pub fn shortest_paths(graph: &impl Graph, source: usize) -> Result<Vec<f64>> {
    let n = graph.order();
    if source >= n {
        return Err(RoamError::VertexOutOfRange { vertex: source, order: n });
    }

    let mut distances = vec![f64::INFINITY; n];
    distances[source] = 0.0;

    // Every vertex enters the heap once; relaxation only ever lowers keys
    // in place via decrease_key.
    let mut heap = IndexedMinHeap::with_capacity(n);
    for v in 0..n {
        heap.insert(v, distances[v])?;
    }

    let mut settled = vec![false; n];

    while let Some((current, key)) = heap.extract_min() {
        // Single-insert design makes duplicates impossible; both guards
        // are kept so the loop stays correct if that ever changes.
        if settled[current] {
            continue;
        }
        settled[current] = true;

        if key > distances[current] {
            continue;
        }

        for v in 0..n {
            let weight = graph.weight(current, v);
            if weight > 0.0 && heap.is_member(v) {
                let candidate = distances[current] + weight;
                if candidate < distances[v] {
                    tracing::trace!(vertex = v, distance = candidate, "relax");
                    distances[v] = candidate;
                    heap.decrease_key(v, candidate);
                }
            }
        }
    }

    Ok(distances)
}

#[cfg(test)]
mod tests;
