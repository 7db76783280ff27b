//! Configuration types and parsing for obra.yml

use crate::error::{CoreError, CoreResult};
use crate::money::MoneyFormat;
use crate::project::ProjectId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace configuration from obra.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Portfolio name shown in headers
    pub name: String,

    /// Seed file with the project records, relative to the workspace
    /// directory. The built-in demo portfolio is used when absent.
    #[serde(default)]
    pub seed: Option<String>,

    /// Currency rendering
    #[serde(default)]
    pub currency: MoneyFormat,

    /// Project selected when the store is created
    #[serde(default)]
    pub default_project: Option<ProjectId>,
}

const DEFAULT_NAME: &str = "Obras";

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            seed: None,
            currency: MoneyFormat::default(),
            default_project: None,
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a workspace directory
    /// Looks for obra.yml or obra.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => Err(CoreError::ConfigNotFound {
                path: dir.join("obra.yml").display().to_string(),
            }),
        }
    }

    /// Path of obra.yml or obra.yaml in `dir`, if either exists
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        ["obra.yml", "obra.yaml"]
            .into_iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Portfolio name cannot be empty".to_string(),
            });
        }

        if matches!(&self.seed, Some(seed) if seed.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: "Seed path cannot be empty".to_string(),
            });
        }

        if self.currency.thousands_separator == self.currency.decimal_separator {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "Thousands and decimal separators must differ, both are '{}'",
                    self.currency.decimal_separator
                ),
            });
        }

        Ok(())
    }

    /// Absolute seed path relative to a workspace root
    pub fn seed_path_absolute(&self, root: &Path) -> Option<PathBuf> {
        self.seed.as_ref().map(|seed| root.join(seed))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
