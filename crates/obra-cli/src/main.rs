//! Obra CLI - construction portfolio and materials budget

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{budget, dashboard, ls, show};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Ls(args) => ls::execute(args, &cli.global),
        cli::Commands::Show(args) => show::execute(args, &cli.global),
        cli::Commands::Budget(args) => budget::execute(args, &cli.global),
        cli::Commands::Dashboard(args) => dashboard::execute(args, &cli.global),
    }
}
