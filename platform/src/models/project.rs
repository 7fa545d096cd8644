//! Project models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::humanize_since;

/// Project build status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// A build is in progress
    Building,

    /// Last build is live
    Deployed,

    /// Last build failed
    Failed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Building => "building",
            ProjectStatus::Deployed => "deployed",
            ProjectStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "building" => Ok(ProjectStatus::Building),
            "deployed" => Ok(ProjectStatus::Deployed),
            "failed" => Ok(ProjectStatus::Failed),
            _ => Err(format!("Invalid project status: {}", s)),
        }
    }
}

/// A deployable project tracked by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub repository: String,
    pub framework: String,
    pub status: ProjectStatus,
    pub last_deploy_at: DateTime<Utc>,
    pub url: Option<String>,
}

impl Project {
    /// Render the project for the API, with `lastDeploy` relative to `now`
    pub fn to_view(&self, now: DateTime<Utc>) -> ProjectView {
        ProjectView {
            id: self.id.clone(),
            name: self.name.clone(),
            repository: self.repository.clone(),
            framework: self.framework.clone(),
            status: self.status,
            last_deploy: humanize_since(now, self.last_deploy_at),
            last_deploy_at: self.last_deploy_at,
            url: self.url.clone(),
        }
    }
}

/// Project as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub name: String,
    pub repository: String,
    pub framework: String,
    pub status: ProjectStatus,
    pub last_deploy: String,
    pub last_deploy_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Project creation request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Display name, derived from the repository when blank
    #[serde(default)]
    pub name: String,
    pub repository: String,
    pub framework: String,
}

/// Derive a project name from a repository URL.
///
/// Takes the last path segment and strips a trailing `.git`.
pub fn repo_name(repository: &str) -> Option<String> {
    let trimmed = repository.trim().trim_end_matches('/');
    let segment = trimmed.rsplit('/').next()?;
    let name = segment.strip_suffix(".git").unwrap_or(segment);
    if name.is_empty() || name.contains(':') {
        return None;
    }
    Some(name.to_string())
}
