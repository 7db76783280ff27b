//! obra-core - Core library for Obra
//!
//! This crate provides the construction project records, the project store
//! with its active-project selection, the materials budget derivations and
//! the portfolio aggregates used by the Obra front ends.

pub mod budget;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod money;
mod newtype_string;
pub mod project;
pub mod search;
pub mod seed;
pub mod store;

pub use budget::{
    add_material, checked_total, compute_total, remove_material, AddMaterial, DraftRejection,
};
pub use config::Config;
pub use dashboard::{
    average_stage_progress, cash_balance, count_active_projects, latest_measurement,
    stage_variance, sum_contract_value, PortfolioSummary, ProjectCostSummary, StatusCount,
};
pub use error::{CoreError, CoreResult};
pub use money::MoneyFormat;
pub use project::{
    Document, EntryType, FinancialEntry, Material, MaterialDraft, MaterialId, Measurement,
    Progress, Project, ProjectId, ProjectStage, ProjectStatus,
};
pub use search::{filter_projects, ProjectFilter};
pub use seed::SeedFile;
pub use store::{ProjectStore, Snapshot};
