//! `roam score` command - length of a reference tour

use std::path::Path;

use crate::cli::Cli;
use crate::commands::format::OutputFormat;
use roam_core::error::Result;
use roam_core::graph::{DenseGraph, Tour};

/// Execute the score command
pub fn execute(cli: &Cli, matrix: &Path, tour_path: &Path) -> Result<()> {
    let graph = DenseGraph::from_path(matrix)?;
    let tour = Tour::from_path(tour_path)?;
    tour.validate_against(&graph)?;
    let length = tour.length(&graph);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "vertices": tour.vertices.len(),
                "closed": tour.closed,
                "length": length,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("length: {}", length);
            if !cli.quiet {
                eprintln!(
                    "{} vertices, {}",
                    tour.vertices.len(),
                    if tour.closed { "closed" } else { "open" }
                );
            }
        }
    }

    Ok(())
}
