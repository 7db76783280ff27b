//! Portfolio search

use crate::project::{Project, ProjectStatus};

/// Criteria for narrowing the project list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive substring of the project name or client
    pub term: Option<String>,
    /// Exact status to keep
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether `project` passes every criterion
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }
        match self.term.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                project.name.to_lowercase().contains(&term)
                    || project.client.to_lowercase().contains(&term)
            }
        }
    }
}

/// Projects passing `filter`, in their original order
pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
