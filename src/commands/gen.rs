//! `roam gen` command - random matrix generation

use crate::cli::{Cli, GenArgs};
use crate::commands::format::OutputFormat;
use roam_core::error::Result;
use roam_core::graph::{generate, GenOptions};

/// Execute the gen command
pub fn execute(cli: &Cli, args: &GenArgs) -> Result<()> {
    let opts = GenOptions {
        order: args.order,
        max_weight: args.max_weight,
        edge_probability: args.probability,
        seed: args.seed,
    };
    let graph = generate(&opts)?;
    let text = graph.to_text();

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)?;
            match cli.format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "status": "ok",
                        "order": args.order,
                        "path": path.display().to_string(),
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    if !cli.quiet {
                        eprintln!("wrote order-{} matrix to {}", args.order, path.display());
                    }
                }
            }
        }
        None => {
            print!("{}", text);
        }
    }

    Ok(())
}
