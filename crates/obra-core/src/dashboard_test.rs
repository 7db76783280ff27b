use super::*;
use crate::project::EntryType;
use crate::seed::SeedFile;
use rust_decimal_macros::dec;

fn portfolio() -> Vec<Project> {
    SeedFile::builtin().projects
}

#[test]
fn test_count_active_projects() {
    let mut projects = portfolio();
    assert_eq!(count_active_projects(&projects), 1);
    projects[1].status = ProjectStatus::Active;
    assert_eq!(count_active_projects(&projects), 2);
    assert_eq!(count_active_projects(&[]), 0);
}

#[test]
fn test_sum_contract_value() {
    assert_eq!(sum_contract_value(&portfolio()), dec!(13350000));
    assert_eq!(sum_contract_value(&[]), dec!(0));
}

#[test]
fn test_stage_variance_signs() {
    let projects = portfolio();
    let project = &projects[0];
    let variances: Vec<Decimal> = project.stages.iter().map(stage_variance).collect();
    assert_eq!(variances, vec![dec!(50000), dec!(-1200000), dec!(-1850000)]);
}

#[test]
fn test_cash_balance() {
    let projects = portfolio();
    let project = &projects[0];
    assert_eq!(cash_balance(&project.financials), dec!(365000));
    assert_eq!(project.financials[0].entry_type, EntryType::Expense);
    assert_eq!(cash_balance(&[]), dec!(0));
}

#[test]
fn test_latest_measurement() {
    let projects = portfolio();
    assert_eq!(latest_measurement(&projects[0]).unwrap().id, "meas1");
    assert!(latest_measurement(&projects[1]).is_none());
}

#[test]
fn test_average_stage_progress() {
    let projects = portfolio();
    // (100 + 65 + 10) / 3
    let average = average_stage_progress(&projects[0].stages).unwrap();
    assert_eq!(average.round_dp(2), dec!(58.33));
    assert_eq!(average_stage_progress(&[]), None);
}

#[test]
fn test_project_cost_summary() {
    let summary = ProjectCostSummary::of(&portfolio()[0]);
    assert_eq!(summary.estimated_cost, dec!(7500000));
    assert_eq!(summary.actual_cost, dec!(4500000));
    assert_eq!(summary.variance, dec!(-3000000));
    assert_eq!(summary.materials_budget, dec!(277000));
    assert_eq!(summary.cash_balance, dec!(365000));
}

#[test]
fn test_portfolio_summary() {
    let summary = PortfolioSummary::of(&portfolio());
    assert_eq!(summary.project_count, 2);
    assert_eq!(summary.active_projects, 1);
    assert_eq!(summary.total_contract_value, dec!(13350000));
    assert_eq!(summary.total_materials_budget, dec!(277000));
    let counts: Vec<(ProjectStatus, usize)> = summary
        .by_status
        .iter()
        .map(|c| (c.status, c.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            (ProjectStatus::Planning, 1),
            (ProjectStatus::Active, 1),
            (ProjectStatus::Paused, 0),
            (ProjectStatus::Completed, 0),
        ]
    );
}

#[test]
fn test_sums_saturate_instead_of_overflowing() {
    let mut projects = portfolio();
    projects[0].contract_value = Decimal::MAX;
    projects[1].contract_value = Decimal::MAX;
    assert_eq!(sum_contract_value(&projects), Decimal::MAX);

    let project = &mut projects[0];
    project.financials[1].value = Decimal::MAX;
    project.financials.push(project.financials[1].clone());
    assert_eq!(cash_balance(&project.financials), Decimal::MAX);

    project.stages[0].estimated_cost = Decimal::MAX;
    project.stages[1].estimated_cost = Decimal::MAX;
    project.stages[0].actual_cost = Decimal::MIN;
    let summary = ProjectCostSummary::of(project);
    assert_eq!(summary.estimated_cost, Decimal::MAX);
    assert_eq!(summary.variance, Decimal::MIN);
    assert_eq!(stage_variance(&project.stages[0]), Decimal::MIN);
}
