//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use obra_core::ProjectStatus;
use rust_decimal::Decimal;

/// Obra - construction portfolio and materials budget
#[derive(Parser, Debug)]
#[command(name = "obra")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override seed file (.yml, .yaml or .json)
    #[arg(short, long, global = true, env = "OBRA_SEED")]
    pub seed: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects in the portfolio
    Ls(LsArgs),

    /// Show the detail of one project
    Show(ShowArgs),

    /// Show and edit the materials budget of one project
    Budget(BudgetArgs),

    /// Portfolio summary
    Dashboard(DashboardArgs),
}

/// Output formats shared by every command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON output
    Json,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Keep projects whose name or client contains this term
    #[arg(long)]
    pub search: Option<String>,

    /// Keep projects in this status (planning, active, paused, completed)
    #[arg(long, value_parser = parse_status)]
    pub status: Option<ProjectStatus>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Project id (defaults to `default_project` from obra.yml)
    pub id: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the budget command
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Project id (defaults to `default_project` from obra.yml)
    pub id: Option<String>,

    /// Add a material with this name
    #[arg(long, value_name = "NAME", requires = "quantity")]
    pub add: Option<String>,

    /// Unit of the added material
    #[arg(long, requires = "add")]
    pub unit: Option<String>,

    /// Quantity of the added material
    #[arg(long, requires = "add", allow_hyphen_values = true)]
    pub quantity: Option<Decimal>,

    /// Unit price of the added material
    #[arg(long, requires = "add", allow_hyphen_values = true)]
    pub price: Option<Decimal>,

    /// Remove the material with this id (repeatable)
    #[arg(long, value_name = "MATERIAL_ID")]
    pub remove: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the dashboard command
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

fn parse_status(s: &str) -> Result<ProjectStatus, String> {
    s.parse()
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
