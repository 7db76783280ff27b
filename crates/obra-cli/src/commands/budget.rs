//! Budget command implementation
//!
//! Edits apply to the in-memory store only and are gone when the process
//! exits.

use anyhow::Result;
use obra_core::{compute_total, AddMaterial, Material, MaterialDraft};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::{BudgetArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{print_json, print_table};
use crate::context::RuntimeContext;

const DEFAULT_UNIT: &str = "un";

/// Execute the budget command
pub fn execute(args: &BudgetArgs, global: &GlobalArgs) -> Result<()> {
    let mut ctx = RuntimeContext::new(global)?;
    ctx.select(args.id.as_deref());

    if ctx.store.active_project().is_none() {
        println!("No project selected.");
        return Ok(());
    }

    let rejected = apply_edits(&mut ctx, args);

    let Some(project) = ctx.store.active_project() else {
        return Ok(());
    };
    let total = compute_total(&project.materials);

    match args.output {
        OutputFormat::Table => {
            if let Some(reason) = &rejected {
                println!("Material not added: {}", reason);
                println!();
            }
            print_materials(&ctx, &project.materials, total);
        }
        OutputFormat::Json => print_json(&BudgetReport {
            project_id: project.id.as_str(),
            materials: &project.materials,
            total,
            rejected,
        })?,
    }
    Ok(())
}

#[derive(Serialize)]
struct BudgetReport<'a> {
    project_id: &'a str,
    materials: &'a [Material],
    total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<String>,
}

/// Apply the add and remove flags in order, returning the rejection reason
/// of the added draft, if any.
fn apply_edits(ctx: &mut RuntimeContext, args: &BudgetArgs) -> Option<String> {
    let mut rejected = None;

    if let (Some(name), Some(quantity)) = (&args.add, args.quantity) {
        let draft = MaterialDraft::new(
            name.as_str(),
            args.unit.as_deref().unwrap_or(DEFAULT_UNIT),
            quantity,
            args.price.unwrap_or(Decimal::ZERO),
        );
        match ctx.store.add_material(draft) {
            AddMaterial::Accepted { material, .. } => {
                ctx.verbose(&format!("Added material {} ({})", material.name(), material.id()));
            }
            AddMaterial::Rejected { reason, .. } => rejected = Some(reason.to_string()),
        }
    }

    for id in &args.remove {
        if ctx.store.remove_material(id) {
            ctx.verbose(&format!("Removed material {}", id));
        } else {
            ctx.verbose(&format!("No material with id {}", id));
        }
    }

    rejected
}

fn print_materials(ctx: &RuntimeContext, materials: &[Material], total: Decimal) {
    if materials.is_empty() {
        println!("No materials budgeted.");
    } else {
        let rows: Vec<Vec<String>> = materials
            .iter()
            .map(|m| {
                vec![
                    m.id().to_string(),
                    m.name().to_string(),
                    m.unit().to_string(),
                    m.quantity().normalize().to_string(),
                    ctx.format_money(m.unit_price()),
                    ctx.format_money(m.total()),
                ]
            })
            .collect();
        print_table(&["ID", "MATERIAL", "UNIT", "QUANTITY", "UNIT PRICE", "TOTAL"], &rows);
        println!();
    }
    println!("Total budget: {}", ctx.format_money(total));
}
