//! Runtime context for CLI commands

use anyhow::{Context, Result};
use obra_core::{Config, ProjectStore, SeedFile};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Runtime context containing the loaded configuration and project store
pub struct RuntimeContext {
    /// Workspace configuration, or the defaults when no obra.yml exists
    pub config: Config,

    /// In-memory project store seeded at start-up
    pub store: ProjectStore,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let project_path = Path::new(&args.project_dir);

        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else if Config::find_in_dir(project_path).is_some() {
            Config::load_from_dir(project_path).context("Failed to load project configuration")?
        } else {
            log::debug!("No obra.yml in {}, using defaults", project_path.display());
            Config::default()
        };

        let seed = match seed_path(args, &config, project_path) {
            Some(path) => SeedFile::load(&path)
                .with_context(|| format!("Failed to load seed file {}", path.display()))?,
            None => SeedFile::builtin(),
        };

        let mut store = ProjectStore::from_seed(seed).context("Invalid seed data")?;
        if let Some(id) = &config.default_project {
            store.select_project(id.as_str());
        }

        let ctx = Self {
            config,
            store,
            verbose: args.verbose,
        };
        ctx.verbose(&format!(
            "Loaded {} projects for '{}'",
            ctx.store.projects().len(),
            ctx.config.name
        ));
        Ok(ctx)
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Format a monetary value using the configured currency
    pub fn format_money(&self, value: Decimal) -> String {
        self.config.currency.format(value)
    }

    /// Select `id`, or keep the configured default project when `id` is absent
    pub fn select(&mut self, id: Option<&str>) {
        if let Some(id) = id {
            self.store.select_project(id);
        }
        match self.store.active_project_id() {
            Some(id) => self.verbose(&format!("Selected project {}", id)),
            None => self.verbose("No project selected"),
        }
    }
}

/// `--seed` wins over the configured seed; relative paths resolve against
/// the project directory.
fn seed_path(args: &GlobalArgs, config: &Config, project_path: &Path) -> Option<PathBuf> {
    match &args.seed {
        Some(seed) => Some(project_path.join(seed)),
        None => config.seed_path_absolute(project_path),
    }
}
