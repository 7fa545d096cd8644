//! Build log store (read-only)

use crate::filter::{matches_search, Choice, LogQuery};
use crate::models::log::LogEntry;
use crate::store::records::{Record, Records};

impl Record for LogEntry {
    const KIND: &'static str = "log entry";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Build log lines, newest first
pub type LogStore = Records<LogEntry>;

impl Records<LogEntry> {
    pub fn filter(&self, query: &LogQuery) -> Vec<LogEntry> {
        self.select(|entry| {
            let matches_project = match &query.project {
                Choice::All => true,
                Choice::Only(project) => {
                    entry.project_id == *project || entry.project_name == *project
                }
            };

            matches_search(&query.search, &[&entry.message, &entry.project_name])
                && matches_project
                && query.level.admits(&entry.level)
        })
    }

    /// Render the filtered log as plain text, one entry per line
    pub fn export(&self, query: &LogQuery) -> String {
        self.filter(query)
            .iter()
            .map(|entry| entry.to_line() + "\n")
            .collect()
    }

    /// Distinct project names in first-seen order
    pub fn project_names(&self) -> Vec<String> {
        self.read(|entries| {
            let mut names: Vec<String> = Vec::new();
            for entry in entries {
                if !names.contains(&entry.project_name) {
                    names.push(entry.project_name.clone());
                }
            }
            names
        })
    }

    /// The `limit` most recent entries
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        let mut entries = self.list();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(limit);
        entries
    }
}
