//! Project records and their nested collections
//!
//! A [`Project`] exclusively owns its stages, materials, measurements,
//! financial entries and documents. Nothing in here is shared between two
//! projects.

mod material;
mod records;
mod stage;

pub use material::{Material, MaterialDraft};
pub use records::{Document, EntryType, FinancialEntry, Measurement};
pub use stage::{Progress, ProjectStage};

use crate::error::{CoreError, CoreResult};
use crate::newtype_string::define_id;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

define_id! {
    /// Identifier of a project. Unique within the store.
    pub struct ProjectId;
}

define_id! {
    /// Identifier of a stage. Unique within its project.
    pub struct StageId;
}

define_id! {
    /// Identifier of a material line item. Unique within its project.
    pub struct MaterialId;
}

define_id! {
    /// Identifier of a measurement checkpoint.
    pub struct MeasurementId;
}

define_id! {
    /// Identifier of a financial entry.
    pub struct FinancialEntryId;
}

define_id! {
    /// Identifier of an attached document.
    pub struct DocumentId;
}

impl MaterialId {
    /// Mint a fresh identifier for a newly budgeted material.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

/// Lifecycle status of a construction job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Not started yet
    #[serde(alias = "planning", alias = "PLANNING", alias = "Planejamento")]
    Planning,
    /// Work on site is under way
    #[serde(alias = "active", alias = "ACTIVE", alias = "Em Execução")]
    Active,
    /// Work stopped, expected to resume
    #[serde(alias = "paused", alias = "PAUSED", alias = "Pausada")]
    Paused,
    /// Delivered
    #[serde(alias = "completed", alias = "COMPLETED", alias = "Finalizada")]
    Completed,
}

impl ProjectStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::Active,
        ProjectStatus::Paused,
        ProjectStatus::Completed,
    ];

    /// Label shown on the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planejamento",
            ProjectStatus::Active => "Em Execução",
            ProjectStatus::Paused => "Pausada",
            ProjectStatus::Completed => "Finalizada",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ProjectStatus::ALL
            .into_iter()
            .find(|status| {
                format!("{:?}", status).to_lowercase() == wanted
                    || status.label().to_lowercase() == wanted
            })
            .ok_or_else(|| {
                format!(
                    "unknown status '{}', expected one of: planning, active, paused, completed",
                    s
                )
            })
    }
}

/// One construction job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique, immutable identifier
    pub id: ProjectId,

    /// Project name
    pub name: String,

    /// Client who commissioned the job
    pub client: String,

    /// Site address
    pub address: String,

    /// Kind of construction (e.g. "Residencial Vertical")
    #[serde(rename = "type")]
    pub project_type: String,

    /// Built area in square meters
    pub area: Decimal,

    /// Contract value
    pub contract_value: Decimal,

    /// Engineer or architect responsible for the job
    pub technical_lead: String,

    /// Planned start date
    pub start_date: NaiveDate,

    /// Planned delivery date
    pub end_date: NaiveDate,

    /// Lifecycle status
    pub status: ProjectStatus,

    /// Execution stages, in execution order
    #[serde(default)]
    pub stages: Vec<ProjectStage>,

    /// Budgeted materials, in insertion order
    #[serde(default)]
    pub materials: Vec<Material>,

    /// Progress checkpoints, chronological
    #[serde(default)]
    pub measurements: Vec<Measurement>,

    /// Income and expense entries
    #[serde(default)]
    pub financials: Vec<FinancialEntry>,

    /// Attachments
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Project {
    /// Look up a material by id
    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id() == id)
    }

    /// Look up a stage by id
    pub fn get_stage(&self, id: &str) -> Option<&ProjectStage> {
        self.stages.iter().find(|s| s.id == id)
    }

    /// Check the record against the model invariants.
    ///
    /// Used on seed input; records built through the store are kept valid by
    /// construction.
    pub fn validate(&self) -> CoreResult<()> {
        let invalid = |reason: String| CoreError::InvalidProject {
            id: self.id.to_string(),
            reason,
        };

        if self.area <= Decimal::ZERO {
            return Err(invalid(format!("area must be positive, got {}", self.area)));
        }
        if self.contract_value < Decimal::ZERO {
            return Err(invalid(format!(
                "contract value must not be negative, got {}",
                self.contract_value
            )));
        }
        if self.end_date < self.start_date {
            return Err(invalid(format!(
                "end date {} is before start date {}",
                self.end_date, self.start_date
            )));
        }

        check_unique("stage", self.stages.iter().map(|s| s.id.as_str())).map_err(invalid)?;
        check_unique("material", self.materials.iter().map(|m| m.id().as_str()))
            .map_err(invalid)?;
        check_unique(
            "measurement",
            self.measurements.iter().map(|m| m.id.as_str()),
        )
        .map_err(invalid)?;
        check_unique(
            "financial entry",
            self.financials.iter().map(|f| f.id.as_str()),
        )
        .map_err(invalid)?;
        check_unique("document", self.documents.iter().map(|d| d.id.as_str()))
            .map_err(invalid)?;

        for stage in &self.stages {
            if stage.estimated_cost < Decimal::ZERO || stage.actual_cost < Decimal::ZERO {
                return Err(invalid(format!("stage '{}' has a negative cost", stage.id)));
            }
        }

        for material in &self.materials {
            if material.quantity() <= Decimal::ZERO {
                return Err(invalid(format!(
                    "material '{}' must have a positive quantity",
                    material.id()
                )));
            }
            if material.unit_price() < Decimal::ZERO {
                return Err(invalid(format!(
                    "material '{}' has a negative unit price",
                    material.id()
                )));
            }
        }

        for pair in self.measurements.windows(2) {
            if pair[1].date < pair[0].date {
                return Err(invalid(format!(
                    "measurement '{}' is dated before '{}'",
                    pair[1].id, pair[0].id
                )));
            }
        }
        if let Some(m) = self
            .measurements
            .iter()
            .find(|m| m.financial_value < Decimal::ZERO)
        {
            return Err(invalid(format!(
                "measurement '{}' has a negative financial value",
                m.id
            )));
        }

        if let Some(entry) = self.financials.iter().find(|f| f.value < Decimal::ZERO) {
            return Err(invalid(format!(
                "financial entry '{}' must carry its sign in the type, not the value",
                entry.id
            )));
        }

        Ok(())
    }
}

fn check_unique<'a>(what: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), String> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(format!("duplicate {} id '{}'", what, id));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
