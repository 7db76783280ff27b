//! Portfolio and project aggregates
//!
//! Everything here is recomputed from the records on each call. There is no
//! caching layer. Sums saturate at the `Decimal` bounds instead of
//! overflowing.

use crate::budget::compute_total;
use crate::project::{FinancialEntry, Measurement, Project, ProjectStage, ProjectStatus};
use rust_decimal::Decimal;
use serde::Serialize;

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Number of projects currently in execution
pub fn count_active_projects(projects: &[Project]) -> usize {
    projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .count()
}

/// Sum of contract values across the portfolio
pub fn sum_contract_value(projects: &[Project]) -> Decimal {
    saturating_sum(projects.iter().map(|p| p.contract_value))
}

/// `actual - estimated` for one stage, unclamped
pub fn stage_variance(stage: &ProjectStage) -> Decimal {
    stage.variance()
}

/// Income minus expense
pub fn cash_balance(financials: &[FinancialEntry]) -> Decimal {
    saturating_sum(financials.iter().map(FinancialEntry::signed_value))
}

/// Most recent measurement by date; the later entry wins on ties
pub fn latest_measurement(project: &Project) -> Option<&Measurement> {
    project.measurements.iter().max_by_key(|m| m.date)
}

/// Unweighted mean of stage progress, `None` without stages
pub fn average_stage_progress(stages: &[ProjectStage]) -> Option<Decimal> {
    if stages.is_empty() {
        return None;
    }
    let sum: Decimal = stages
        .iter()
        .map(|s| Decimal::from(s.progress.percent()))
        .sum();
    Some(sum / Decimal::from(stages.len()))
}

/// Cost picture of a single project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCostSummary {
    pub estimated_cost: Decimal,
    pub actual_cost: Decimal,
    /// `actual_cost - estimated_cost`
    pub variance: Decimal,
    pub materials_budget: Decimal,
    pub cash_balance: Decimal,
    pub average_progress: Option<Decimal>,
}

impl ProjectCostSummary {
    pub fn of(project: &Project) -> Self {
        let estimated_cost = saturating_sum(project.stages.iter().map(|s| s.estimated_cost));
        let actual_cost = saturating_sum(project.stages.iter().map(|s| s.actual_cost));
        Self {
            estimated_cost,
            actual_cost,
            variance: actual_cost.saturating_sub(estimated_cost),
            materials_budget: compute_total(&project.materials),
            cash_balance: cash_balance(&project.financials),
            average_progress: average_stage_progress(&project.stages),
        }
    }
}

/// Count of projects in one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: usize,
}

/// Headline figures for the whole portfolio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub project_count: usize,
    pub active_projects: usize,
    pub total_contract_value: Decimal,
    pub total_materials_budget: Decimal,
    /// One entry per status, in lifecycle order, including zero counts
    pub by_status: Vec<StatusCount>,
}

impl PortfolioSummary {
    pub fn of(projects: &[Project]) -> Self {
        let by_status = ProjectStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: projects.iter().filter(|p| p.status == status).count(),
            })
            .collect();

        Self {
            project_count: projects.len(),
            active_projects: count_active_projects(projects),
            total_contract_value: sum_contract_value(projects),
            total_materials_budget: saturating_sum(
                projects.iter().map(|p| compute_total(&p.materials)),
            ),
            by_status,
        }
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
