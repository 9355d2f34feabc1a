//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`: single-source shortest paths over the indexed heap
//! - `traversal`: depth-first and breadth-first visitation
//! - `tour`: greedy nearest-neighbor tour construction

pub mod dijkstra;
pub mod tour;
pub mod traversal;

pub use dijkstra::shortest_paths;
pub use tour::greedy_tour;
pub use traversal::{breadth_first, depth_first};
