//! Deployment history

use crate::filter::{matches_search, DeploymentQuery};
use crate::models::deployment::Deployment;
use crate::store::records::{Record, Records};

impl Record for Deployment {
    const KIND: &'static str = "deployment";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Deployment history, newest first
pub type DeploymentStore = Records<Deployment>;

impl Records<Deployment> {
    /// Deployments whose project name or commit message contains the search term
    pub fn filter(&self, query: &DeploymentQuery) -> Vec<Deployment> {
        self.select(|d| {
            matches_search(&query.search, &[&d.project_name, &d.commit])
                && query.status.admits(&d.status)
        })
    }

    /// History of a single project
    pub fn for_project(&self, project_id: &str) -> Vec<Deployment> {
        self.select(|d| d.project_id == project_id)
    }
}
