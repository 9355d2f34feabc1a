//! `roam dfs` / `roam bfs` commands - visitation order

use std::path::Path;

use crate::cli::Cli;
use crate::commands::format::OutputFormat;
use roam_core::error::Result;
use roam_core::graph::{breadth_first, depth_first, DenseGraph, TraversalReport};

/// Which traversal to run
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    Depth,
    Breadth,
}

/// Execute a traversal command
pub fn execute(cli: &Cli, matrix: &Path, start: usize, strategy: Strategy) -> Result<()> {
    let graph = DenseGraph::from_path(matrix)?;

    let mut visited = Vec::new();
    match strategy {
        Strategy::Depth => depth_first(&graph, start, &mut visited)?,
        Strategy::Breadth => breadth_first(&graph, start, &mut visited)?,
    }

    let report = TraversalReport { start, visited };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            for vertex in &report.visited {
                println!("visited {}", vertex);
            }
            if !cli.quiet {
                eprintln!("{} vertices reached from {}", report.visited.len(), start);
            }
        }
    }

    Ok(())
}
