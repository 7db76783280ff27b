//! Project store: the single source of truth for the portfolio
//!
//! The store owns the ordered project collection and the active-project
//! selection. The collection is held as an immutable [`Snapshot`]; every
//! successful mutation swaps in a new snapshot, so a reader holding an old
//! one can detect the change with [`Snapshot::same_as`] instead of comparing
//! contents.
//!
//! The store is single-threaded. Wrap it in a single `Mutex` if it is ever
//! shared between threads; there is no finer-grained state to lock.

use crate::budget::{self, AddMaterial};
use crate::error::{CoreError, CoreResult};
use crate::project::{Material, MaterialDraft, Project, ProjectId};
use crate::seed::SeedFile;
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable, cheaply clonable view of the project collection
#[derive(Debug, Clone)]
pub struct Snapshot(Arc<[Project]>);

impl Snapshot {
    /// Whether both handles point at the same collection
    pub fn same_as(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Look up a project by id
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.0.iter().find(|p| p.id == id)
    }
}

impl Deref for Snapshot {
    type Target = [Project];

    fn deref(&self) -> &[Project] {
        &self.0
    }
}

impl From<Vec<Project>> for Snapshot {
    fn from(projects: Vec<Project>) -> Self {
        Self(projects.into())
    }
}

/// Owner of the project collection and the active-project selection
#[derive(Debug, Clone)]
pub struct ProjectStore {
    projects: Snapshot,
    active_project_id: Option<ProjectId>,
}

impl ProjectStore {
    /// Seed the store. No selection is active.
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: projects.into(),
            active_project_id: None,
        }
    }

    /// Seed the store from validated seed data
    pub fn from_seed(seed: SeedFile) -> CoreResult<Self> {
        seed.validate()?;
        log::debug!("Seeding store with {} projects", seed.projects.len());
        Ok(Self::new(seed.projects))
    }

    /// Read-only view of the projects, in seed order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Handle to the current snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.projects.clone()
    }

    pub fn get_project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    /// The selected id, which may not match any project
    pub fn active_project_id(&self) -> Option<&ProjectId> {
        self.active_project_id.as_ref()
    }

    /// Resolve the selection against the current collection.
    ///
    /// Returns `None` when nothing is selected or when the selected id
    /// matches no project.
    pub fn active_project(&self) -> Option<&Project> {
        let id = self.active_project_id.as_ref()?;
        self.projects.get(id)
    }

    /// Select a project. The id is not checked against the collection; an
    /// empty id clears the selection.
    pub fn select_project(&mut self, id: &str) {
        match ProjectId::try_new(id) {
            Some(id) => {
                log::debug!("Selecting project '{}'", id);
                self.active_project_id = Some(id);
            }
            None => {
                log::debug!("Empty project id, clearing selection");
                self.clear_selection();
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.active_project_id = None;
    }

    /// Replace the materials of the active project.
    ///
    /// A no-op returning `false` unless `project_id` equals the active id and
    /// that id resolves to a project. Otherwise only that project's
    /// materials change, in a new snapshot, and `true` is returned.
    pub fn replace_materials(&mut self, project_id: &str, materials: Vec<Material>) -> bool {
        let Some(active_id) = self.active_project_id.as_ref() else {
            log::debug!("Ignoring materials update for '{}': no active project", project_id);
            return false;
        };
        if active_id != project_id {
            log::debug!(
                "Ignoring materials update for '{}': active project is '{}'",
                project_id,
                active_id
            );
            return false;
        }
        let Some(index) = self.projects.iter().position(|p| p.id == project_id) else {
            log::debug!("Ignoring materials update for '{}': no such project", project_id);
            return false;
        };

        let mut next = self.projects.to_vec();
        next[index].materials = materials;
        self.projects = next.into();
        log::debug!("Replaced materials of project '{}'", project_id);
        true
    }

    /// Add a material to the active project's budget.
    ///
    /// Rejected drafts and a missing or stale selection leave the store
    /// untouched.
    pub fn add_material(&mut self, draft: MaterialDraft) -> AddMaterial {
        let Some(project) = self.active_project() else {
            return AddMaterial::Rejected {
                materials: Vec::new(),
                reason: budget::DraftRejection::NoActiveProject,
            };
        };
        let project_id = project.id.clone();
        let outcome = budget::add_material(&project.materials, draft);
        if outcome.is_accepted() {
            self.replace_materials(&project_id, outcome.materials().to_vec());
        }
        outcome
    }

    /// Remove a material from the active project's budget.
    ///
    /// Returns `false` when nothing was removed.
    pub fn remove_material(&mut self, material_id: &str) -> bool {
        let Some(project) = self.active_project() else {
            return false;
        };
        if project.get_material(material_id).is_none() {
            return false;
        }
        let project_id = project.id.clone();
        let materials = budget::remove_material(&project.materials, material_id);
        self.replace_materials(&project_id, materials)
    }
}

/// Ensure no two projects share an id
pub(crate) fn check_unique_projects(projects: &[Project]) -> CoreResult<()> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.id.as_str()) {
            return Err(CoreError::DuplicateProject {
                id: project.id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
