//! Dense weighted graphs and the algorithms that run over them
//!
//! Provides the building blocks for graph analysis:
//! - Dense adjacency-matrix graphs with a text format
//! - An indexed min-heap for logarithmic decrease-key
//! - Dijkstra shortest paths, DFS/BFS traversal, greedy tours
//! - Graph trait for pluggable adjacency sources

pub mod algos;
pub mod gen;
pub mod heap;
pub mod matrix;
pub mod provider;
pub mod types;

pub use algos::{breadth_first, depth_first, greedy_tour, shortest_paths};
pub use gen::{generate, GenOptions};
pub use heap::IndexedMinHeap;
pub use matrix::DenseGraph;
pub use provider::Graph;
pub use types::{DistanceReport, Tour, TraversalReport, VisitSink};
