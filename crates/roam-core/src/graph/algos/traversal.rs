//! Depth-first and breadth-first traversal

use std::collections::VecDeque;

use crate::error::{Result, RoamError};
use crate::graph::provider::Graph;
use crate::graph::types::VisitSink;

/// Visit every vertex reachable from `start` in depth-first preorder,
/// reporting each visit to `sink`.
///
/// Neighbors are explored in increasing index order. Implemented with an
/// explicit stack of (vertex, resume index) frames rather than recursion,
/// so the visit order matches the recursive formulation without call
/// stacks growing with the graph.
#[tracing::instrument(skip(graph, sink), fields(order = graph.order()))]
pub fn depth_first(graph: &impl Graph, start: usize, sink: &mut impl VisitSink) -> Result<()> {
    let n = graph.order();
    if start >= n {
        return Err(RoamError::VertexOutOfRange { vertex: start, order: n });
    }

    let mut visited = vec![false; n];
    let mut stack = vec![(start, 0usize)];
    visited[start] = true;
    tracing::trace!(vertex = start, "visit");
    sink.visit(start);

    while let Some((current, resume)) = stack.last_mut() {
        let current = *current;
        let mut advanced = false;

        for v in *resume..n {
            if graph.weight(current, v) != 0.0 && !visited[v] {
                *resume = v + 1;
                visited[v] = true;
                tracing::trace!(vertex = v, "visit");
                sink.visit(v);
                stack.push((v, 0));
                advanced = true;
                break;
            }
        }

        if !advanced {
            stack.pop();
        }
    }

    Ok(())
}

/// Visit every vertex reachable from `start` in breadth-first order,
/// reporting each visit to `sink`.
///
/// Vertices are marked visited when enqueued, not when dequeued, so no
/// vertex enters the queue twice. Neighbors are explored in increasing
/// index order.
#[tracing::instrument(skip(graph, sink), fields(order = graph.order()))]
pub fn breadth_first(graph: &impl Graph, start: usize, sink: &mut impl VisitSink) -> Result<()> {
    let n = graph.order();
    if start >= n {
        return Err(RoamError::VertexOutOfRange { vertex: start, order: n });
    }

    let mut visited = vec![false; n];
    let mut queue = VecDeque::with_capacity(n);
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        tracing::trace!(vertex = current, "visit");
        sink.visit(current);

        for v in 0..n {
            if graph.weight(current, v) != 0.0 && !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }

    Ok(())
}
