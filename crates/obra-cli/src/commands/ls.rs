//! List command implementation

use anyhow::Result;
use obra_core::{filter_projects, Project, ProjectFilter, ProjectStatus};
use rust_decimal::Decimal;

use crate::cli::{GlobalArgs, LsArgs, OutputFormat};
use crate::commands::common::{print_json, print_table};
use crate::commands::format_helpers::format_date;
use crate::context::RuntimeContext;

/// Execute the ls command
pub fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let filter = ProjectFilter {
        term: args.search.clone(),
        status: args.status,
    };
    let found = filter_projects(ctx.store.projects(), &filter);
    ctx.verbose(&format!(
        "{} of {} projects match",
        found.len(),
        ctx.store.projects().len()
    ));

    match args.output {
        OutputFormat::Table => print_projects_table(&ctx, &found),
        OutputFormat::Json => {
            let rows: Vec<ProjectRow> = found.iter().map(|p| ProjectRow::from(*p)).collect();
            print_json(&rows)?;
        }
    }

    Ok(())
}

/// Project card fields for display
#[derive(Debug, serde::Serialize)]
struct ProjectRow<'a> {
    id: &'a str,
    name: &'a str,
    client: &'a str,
    status: ProjectStatus,
    start_date: chrono::NaiveDate,
    contract_value: Decimal,
}

impl<'a> From<&'a Project> for ProjectRow<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            id: project.id.as_str(),
            name: &project.name,
            client: &project.client,
            status: project.status,
            start_date: project.start_date,
            contract_value: project.contract_value,
        }
    }
}

fn print_projects_table(ctx: &RuntimeContext, projects: &[&Project]) {
    if projects.is_empty() {
        println!("No projects found.");
        return;
    }

    let rows: Vec<Vec<String>> = projects
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.client.clone(),
                p.status.label().to_string(),
                format_date(p.start_date),
                ctx.format_money(p.contract_value),
            ]
        })
        .collect();
    print_table(
        &["ID", "NAME", "CLIENT", "STATUS", "START", "CONTRACT"],
        &rows,
    );

    let total: Decimal = projects.iter().map(|p| p.contract_value).sum();
    println!();
    println!(
        "{} projects, {} under contract",
        projects.len(),
        ctx.format_money(total)
    );
}
