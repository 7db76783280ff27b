//! Show command implementation

use anyhow::Result;
use obra_core::{latest_measurement, stage_variance, Project, ProjectCostSummary};
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, ShowArgs};
use crate::commands::common::{print_json, print_table};
use crate::commands::format_helpers::{format_area, format_date, progress_bar};
use crate::context::RuntimeContext;

/// Execute the show command
pub fn execute(args: &ShowArgs, global: &GlobalArgs) -> Result<()> {
    let mut ctx = RuntimeContext::new(global)?;
    ctx.select(args.id.as_deref());

    let Some(project) = ctx.store.active_project() else {
        println!("No project selected.");
        return Ok(());
    };

    match args.output {
        OutputFormat::Table => print_detail(&ctx, project),
        OutputFormat::Json => print_json(&ProjectDetail {
            project,
            summary: ProjectCostSummary::of(project),
        })?,
    }
    Ok(())
}

#[derive(Serialize)]
struct ProjectDetail<'a> {
    project: &'a Project,
    summary: ProjectCostSummary,
}

fn print_detail(ctx: &RuntimeContext, project: &Project) {
    let summary = ProjectCostSummary::of(project);

    println!("{} [{}]", project.name, project.status);
    println!("{}", project.address);
    println!();
    println!("Client:          {}", project.client);
    println!("Type:            {}", project.project_type);
    println!("Area:            {}", format_area(project.area, &ctx.config.currency));
    println!("Start:           {}", format_date(project.start_date));
    println!("Delivery:        {}", format_date(project.end_date));
    println!("Technical lead:  {}", project.technical_lead);
    println!("Contract:        {}", ctx.format_money(project.contract_value));
    println!();

    if project.stages.is_empty() {
        println!("No stages planned.");
    } else {
        let rows: Vec<Vec<String>> = project
            .stages
            .iter()
            .map(|stage| {
                vec![
                    stage.name.clone(),
                    progress_bar(stage.progress),
                    ctx.format_money(stage.actual_cost),
                    ctx.format_money(stage.estimated_cost),
                    ctx.format_money(stage_variance(stage)),
                ]
            })
            .collect();
        print_table(&["STAGE", "PROGRESS", "ACTUAL", "ESTIMATED", "VARIANCE"], &rows);
    }
    println!();

    println!("Estimated cost:  {}", ctx.format_money(summary.estimated_cost));
    println!("Actual cost:     {}", ctx.format_money(summary.actual_cost));
    println!("Variance:        {}", ctx.format_money(summary.variance));
    println!("Materials:       {}", ctx.format_money(summary.materials_budget));
    println!("Cash balance:    {}", ctx.format_money(summary.cash_balance));

    if let Some(measurement) = latest_measurement(project) {
        println!(
            "Last measurement: {} at {} ({}), {}",
            format_date(measurement.date),
            measurement.physical_progress,
            ctx.format_money(measurement.financial_value),
            measurement.description
        );
    }

    if !project.documents.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = project
            .documents
            .iter()
            .map(|d| vec![d.name.clone(), d.doc_type.clone(), d.url.clone()])
            .collect();
        print_table(&["DOCUMENT", "TYPE", "URL"], &rows);
    }
}
