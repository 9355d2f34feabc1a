//! `roam show` command - echo a parsed matrix

use std::path::Path;

use crate::cli::Cli;
use crate::commands::format::OutputFormat;
use roam_core::error::Result;
use roam_core::graph::{DenseGraph, Graph};

/// Execute the show command
pub fn execute(cli: &Cli, matrix: &Path) -> Result<()> {
    let graph = DenseGraph::from_path(matrix)?;

    match cli.format {
        OutputFormat::Json => {
            let rows: Vec<&[f64]> = (0..graph.order()).map(|u| graph.row(u)).collect();
            let output = serde_json::json!({
                "order": graph.order(),
                "rows": rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print!("{}", graph.to_text());
        }
    }

    Ok(())
}
