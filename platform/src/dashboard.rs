//! Dashboard overview computed from the live stores

use serde::Serialize;

use crate::models::deployment::DeploymentStatus;
use crate::models::domain::DomainStatus;
use crate::models::log::LogEntry;
use crate::models::project::ProjectStatus;
use crate::store::Stores;

/// Number of log entries shown as recent activity
pub const RECENT_ACTIVITY: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectCounts {
    pub total: usize,
    pub building: usize,
    pub deployed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeploymentCounts {
    pub total: usize,
    pub success: usize,
    pub building: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainCounts {
    pub total: usize,
    pub verified: usize,
    pub pending: usize,
    pub failed: usize,

    /// Verified domains serving a certificate
    pub secured: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub projects: ProjectCounts,
    pub deployments: DeploymentCounts,
    pub domains: DomainCounts,
    pub recent_activity: Vec<LogEntry>,
}

pub fn summarize(stores: &Stores) -> Summary {
    let projects = stores.projects.read(|entries| {
        entries.iter().fold(ProjectCounts::default(), |mut counts, p| {
            counts.total += 1;
            match p.status {
                ProjectStatus::Building => counts.building += 1,
                ProjectStatus::Deployed => counts.deployed += 1,
                ProjectStatus::Failed => counts.failed += 1,
            }
            counts
        })
    });

    let deployments = stores.deployments.read(|entries| {
        entries.iter().fold(DeploymentCounts::default(), |mut counts, d| {
            counts.total += 1;
            match d.status {
                DeploymentStatus::Success => counts.success += 1,
                DeploymentStatus::Building => counts.building += 1,
                DeploymentStatus::Failed => counts.failed += 1,
            }
            counts
        })
    });

    let domains = stores.domains.read(|entries| {
        entries.iter().fold(DomainCounts::default(), |mut counts, d| {
            counts.total += 1;
            match d.state.status() {
                DomainStatus::Verified => counts.verified += 1,
                DomainStatus::Pending => counts.pending += 1,
                DomainStatus::Failed => counts.failed += 1,
            }
            if d.state.ssl() {
                counts.secured += 1;
            }
            counts
        })
    });

    Summary {
        projects,
        deployments,
        domains,
        recent_activity: stores.logs.recent(RECENT_ACTIVITY),
    }
}
