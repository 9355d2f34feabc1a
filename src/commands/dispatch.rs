//! Command dispatch logic for roam

use crate::cli::{Cli, Commands};
use crate::commands;
use roam_core::error::Result;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Show { matrix } => commands::show::execute(cli, matrix),

        Commands::Dfs { matrix, start } => {
            commands::traverse::execute(cli, matrix, *start, commands::traverse::Strategy::Depth)
        }

        Commands::Bfs { matrix, start } => {
            commands::traverse::execute(cli, matrix, *start, commands::traverse::Strategy::Breadth)
        }

        Commands::Distances { matrix, source } => {
            commands::distances::execute(cli, matrix, *source)
        }

        Commands::Tour { matrix, start } => commands::tour::execute(cli, matrix, *start),

        Commands::Score { matrix, tour } => commands::score::execute(cli, matrix, tour),

        Commands::Gen(args) => commands::gen::execute(cli, args),
    }
}
