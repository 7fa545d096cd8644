//! Project store

use crate::filter::{matches_search, ProjectQuery};
use crate::models::project::Project;
use crate::store::records::{Record, Records};

impl Record for Project {
    const KIND: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }
}

/// In-memory project list, newest first
pub type ProjectStore = Records<Project>;

impl Records<Project> {
    /// Projects whose name or framework contains the search term
    pub fn filter(&self, query: &ProjectQuery) -> Vec<Project> {
        self.select(|p| {
            matches_search(&query.search, &[&p.name, &p.framework])
                && query.status.admits(&p.status)
        })
    }

    /// Name of the project with `id`
    pub fn name_of(&self, id: &str) -> Option<String> {
        self.read(|entries| entries.iter().find(|p| p.id == id).map(|p| p.name.clone()))
    }
}
