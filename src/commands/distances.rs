//! `roam distances` command - single-source shortest paths

use std::path::Path;

use crate::cli::Cli;
use crate::commands::format::{format_distance, OutputFormat};
use roam_core::error::Result;
use roam_core::graph::{shortest_paths, DenseGraph, DistanceReport};

/// Execute the distances command
pub fn execute(cli: &Cli, matrix: &Path, source: usize) -> Result<()> {
    let graph = DenseGraph::from_path(matrix)?;
    let distances = shortest_paths(&graph, source)?;
    let report = DistanceReport { source, distances };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            for (vertex, distance) in report.distances.iter().enumerate() {
                println!("{}: {}", vertex, format_distance(*distance));
            }
        }
    }

    Ok(())
}
