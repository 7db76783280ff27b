//! Seed data for the project store
//!
//! The store is rebuilt from seed data on every start. Seeds come either from
//! a YAML/JSON file listing the projects or from the built-in demo portfolio.

use crate::error::{CoreError, CoreResult};
use crate::project::{
    Document, DocumentId, EntryType, FinancialEntry, FinancialEntryId, Material, MaterialId,
    Measurement, MeasurementId, Progress, Project, ProjectId, ProjectStage, ProjectStatus, StageId,
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered list of project records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl SeedFile {
    /// Load seed data from a `.yml`, `.yaml` or `.json` file
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::SeedNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        let seed: SeedFile = match extension.as_str() {
            "yml" | "yaml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => {
                return Err(CoreError::UnsupportedSeedFormat {
                    path: path.display().to_string(),
                    extension,
                })
            }
        };

        if seed.projects.is_empty() {
            log::warn!("Seed file {} contains no projects", path.display());
        }
        log::debug!(
            "Loaded {} projects from {}",
            seed.projects.len(),
            path.display()
        );
        Ok(seed)
    }

    /// Check every record and the uniqueness of project ids
    pub fn validate(&self) -> CoreResult<()> {
        crate::store::check_unique_projects(&self.projects)?;
        for project in &self.projects {
            project.validate()?;
        }
        Ok(())
    }

    /// The demo portfolio shipped with the dashboard
    pub fn builtin() -> Self {
        Self {
            projects: vec![edificio_horizonte(), casa_vale_verde()],
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn progress(percent: i64) -> Progress {
    Progress::new(percent).unwrap_or_default()
}

fn edificio_horizonte() -> Project {
    Project {
        id: ProjectId::new("1"),
        name: "Edifício Horizonte".to_string(),
        client: "Construtora Alpha".to_string(),
        address: "Av. Paulista, 1000 - SP".to_string(),
        project_type: "Residencial Vertical".to_string(),
        area: dec!(4500),
        contract_value: dec!(12500000),
        technical_lead: "Eng. Roberto Silva".to_string(),
        start_date: date(2023, 1, 15),
        end_date: date(2025, 6, 30),
        status: ProjectStatus::Active,
        stages: vec![
            ProjectStage {
                id: StageId::new("s1"),
                name: "Fundação".to_string(),
                progress: progress(100),
                estimated_cost: dec!(1500000),
                actual_cost: dec!(1550000),
            },
            ProjectStage {
                id: StageId::new("s2"),
                name: "Estrutura".to_string(),
                progress: progress(65),
                estimated_cost: dec!(4000000),
                actual_cost: dec!(2800000),
            },
            ProjectStage {
                id: StageId::new("s3"),
                name: "Alvenaria".to_string(),
                progress: progress(10),
                estimated_cost: dec!(2000000),
                actual_cost: dec!(150000),
            },
        ],
        materials: [
            Material::try_new(
                MaterialId::new("m1"),
                "Cimento CP-II",
                "Saco 50kg",
                dec!(5000),
                dec!(35.00),
            ),
            Material::try_new(
                MaterialId::new("m2"),
                "Aço CA-50 10mm",
                "kg",
                dec!(12000),
                dec!(8.50),
            ),
        ]
        .into_iter()
        .flatten()
        .collect(),
        measurements: vec![Measurement {
            id: MeasurementId::new("meas1"),
            date: date(2024, 3, 1),
            physical_progress: progress(35),
            financial_value: dec!(4375000),
            description: "Conclusão da laje do 4º pavimento".to_string(),
            photos: Vec::new(),
        }],
        financials: vec![
            FinancialEntry {
                id: FinancialEntryId::new("f1"),
                date: date(2024, 3, 5),
                description: "Pagamento Fornecedor Aço".to_string(),
                entry_type: EntryType::Expense,
                value: dec!(85000),
                category: "Materiais".to_string(),
            },
            FinancialEntry {
                id: FinancialEntryId::new("f2"),
                date: date(2024, 3, 10),
                description: "Medição Março/24".to_string(),
                entry_type: EntryType::Income,
                value: dec!(450000),
                category: "Receita Obra".to_string(),
            },
        ],
        documents: vec![Document {
            id: DocumentId::new("d1"),
            name: "ART_Execucao.pdf".to_string(),
            doc_type: "ART".to_string(),
            url: "#".to_string(),
        }],
    }
}

fn casa_vale_verde() -> Project {
    Project {
        id: ProjectId::new("2"),
        name: "Casa Vale Verde".to_string(),
        client: "Família Oliveira".to_string(),
        address: "Condomínio Vale Verde, Casa 42".to_string(),
        project_type: "Residencial Unifamiliar".to_string(),
        area: dec!(350),
        contract_value: dec!(850000),
        technical_lead: "Arq. Mariana Costa".to_string(),
        start_date: date(2024, 2, 1),
        end_date: date(2024, 12, 15),
        status: ProjectStatus::Planning,
        stages: vec![ProjectStage {
            id: StageId::new("s1"),
            name: "Terraplenagem".to_string(),
            progress: Progress::ZERO,
            estimated_cost: dec!(45000),
            actual_cost: dec!(0),
        }],
        materials: Vec::new(),
        measurements: Vec::new(),
        financials: Vec::new(),
        documents: Vec::new(),
    }
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
