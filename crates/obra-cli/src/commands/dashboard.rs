//! Dashboard command implementation

use anyhow::Result;
use obra_core::PortfolioSummary;

use crate::cli::{DashboardArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{print_json, print_table};
use crate::context::RuntimeContext;

/// Execute the dashboard command
pub fn execute(args: &DashboardArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let summary = PortfolioSummary::of(ctx.store.projects());

    match args.output {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Table => print_summary(&ctx, &summary),
    }
    Ok(())
}

fn print_summary(ctx: &RuntimeContext, summary: &PortfolioSummary) {
    println!("{}", ctx.config.name);
    println!();
    println!("Projects:          {}", summary.project_count);
    println!("Active:            {}", summary.active_projects);
    println!(
        "Contract value:    {}",
        ctx.format_money(summary.total_contract_value)
    );
    println!(
        "Materials budget:  {}",
        ctx.format_money(summary.total_materials_budget)
    );
    println!();

    let rows: Vec<Vec<String>> = summary
        .by_status
        .iter()
        .map(|c| vec![c.status.label().to_string(), c.count.to_string()])
        .collect();
    print_table(&["STATUS", "PROJECTS"], &rows);
}
