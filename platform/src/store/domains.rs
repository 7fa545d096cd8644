//! Domain store

use crate::models::domain::Domain;
use crate::store::records::{Record, Records};

impl Record for Domain {
    const KIND: &'static str = "domain";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Custom domains, newest first
pub type DomainStore = Records<Domain>;

impl Records<Domain> {
    /// Domains attached to a project
    pub fn for_project(&self, project_id: &str) -> Vec<Domain> {
        self.select(|d| d.project_id == project_id)
    }
}
