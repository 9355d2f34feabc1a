//! CLI argument parsing for roam
//!
//! Uses clap derive. Global flags: --format, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use crate::commands::format::OutputFormat;

/// Roam - graph analysis over dense weighted matrices
#[derive(Parser, Debug)]
#[command(name = "roam")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "ROAM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a graph matrix after parsing it
    Show {
        /// Path to a matrix file
        matrix: PathBuf,
    },

    /// Print the depth-first visitation order
    Dfs {
        /// Path to a matrix file
        matrix: PathBuf,

        /// Start vertex
        #[arg(long, short, default_value_t = 0)]
        start: usize,
    },

    /// Print the breadth-first visitation order
    Bfs {
        /// Path to a matrix file
        matrix: PathBuf,

        /// Start vertex
        #[arg(long, short, default_value_t = 0)]
        start: usize,
    },

    /// Print shortest-path distances from a source vertex
    Distances {
        /// Path to a matrix file
        matrix: PathBuf,

        /// Source vertex
        #[arg(long, short, default_value_t = 0)]
        source: usize,
    },

    /// Build a greedy nearest-neighbor tour
    Tour {
        /// Path to a matrix file
        matrix: PathBuf,

        /// Start vertex
        #[arg(long, short, default_value_t = 0)]
        start: usize,
    },

    /// Score a reference tour file against a matrix
    Score {
        /// Path to a matrix file
        matrix: PathBuf,

        /// Path to a tour file (1-based indices, -1 terminated)
        tour: PathBuf,
    },

    /// Generate a random graph matrix
    Gen(GenArgs),
}

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Vertex count
    #[arg(long, short = 'n')]
    pub order: usize,

    /// Maximum edge weight (inclusive)
    #[arg(long, default_value_t = 10.0)]
    pub max_weight: f64,

    /// Probability that any vertex pair gets an edge
    #[arg(long, short, default_value_t = 0.5)]
    pub probability: f64,

    /// RNG seed
    #[arg(long, short, default_value_t = 0, env = "ROAM_SEED")]
    pub seed: u64,

    /// Write the matrix to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
