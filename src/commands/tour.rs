//! `roam tour` command - greedy nearest-neighbor tour

use std::path::Path;

use crate::cli::Cli;
use crate::commands::format::OutputFormat;
use roam_core::error::Result;
use roam_core::graph::{greedy_tour, DenseGraph};

/// Execute the tour command
pub fn execute(cli: &Cli, matrix: &Path, start: usize) -> Result<()> {
    let graph = DenseGraph::from_path(matrix)?;
    let tour = greedy_tour(&graph, start)?;
    let length = tour.length(&graph);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "tour": tour,
                "length": length,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let vertices: Vec<String> = tour.vertices.iter().map(|v| v.to_string()).collect();
            println!("{}", vertices.join(" "));
            println!(
                "length: {} ({})",
                length,
                if tour.closed { "closed" } else { "open" }
            );
        }
    }

    Ok(())
}
