//! State transitions for projects, deployments and domains

use std::time::Duration;

use crate::errors::PlatformError;
use crate::models::deployment::DeploymentStatus;
use crate::models::domain::DomainState;
use crate::models::project::ProjectStatus;

/// Simulation timings
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    /// Delay between creating a project and its first deploy completing
    pub build_delay: Duration,

    /// Delay for a redeploy to complete
    pub redeploy_delay: Duration,

    /// Delay between adding a domain and it being verified
    pub verify_delay: Duration,

    /// Host suffix for synthesized project URLs
    pub preview_domain: String,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            build_delay: Duration::from_millis(3000),
            redeploy_delay: Duration::from_millis(2000),
            verify_delay: Duration::from_millis(3000),
            preview_domain: "vercel.app".to_string(),
        }
    }
}

impl SimulationSettings {
    /// URL a project is published at once deployed
    pub fn preview_url(&self, project_name: &str) -> String {
        format!("https://{}.{}", project_name, self.preview_domain)
    }
}

/// Build event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEvent {
    /// Start a (re)build
    Deploy,

    /// Build finished and was published
    BuildSucceeded,
}

/// Domain verification event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainEvent {
    /// DNS checked out and a certificate was issued
    Verified,
}

impl ProjectStatus {
    /// Process an event and return the next status
    pub fn apply(self, event: BuildEvent) -> Result<ProjectStatus, PlatformError> {
        match (self, event) {
            // A deploy may be requested from any state, including mid-build
            (_, BuildEvent::Deploy) => Ok(ProjectStatus::Building),

            (ProjectStatus::Building, BuildEvent::BuildSucceeded) => Ok(ProjectStatus::Deployed),
            // Overlapping builds: the earlier timer already published
            (ProjectStatus::Deployed, BuildEvent::BuildSucceeded) => Ok(ProjectStatus::Deployed),

            (state, event) => Err(PlatformError::InvalidTransition(format!(
                "project {:?} -> {:?}",
                state, event
            ))),
        }
    }
}

impl DeploymentStatus {
    /// Process an event and return the next status
    pub fn apply(self, event: BuildEvent) -> Result<DeploymentStatus, PlatformError> {
        match (self, event) {
            (_, BuildEvent::Deploy) => Ok(DeploymentStatus::Building),
            (DeploymentStatus::Building, BuildEvent::BuildSucceeded)
            | (DeploymentStatus::Success, BuildEvent::BuildSucceeded) => {
                Ok(DeploymentStatus::Success)
            }
            (state, event) => Err(PlatformError::InvalidTransition(format!(
                "deployment {:?} -> {:?}",
                state, event
            ))),
        }
    }
}

impl DomainState {
    /// Process an event and return the next state
    pub fn apply(self, event: DomainEvent) -> Result<DomainState, PlatformError> {
        match (self, event) {
            (DomainState::Pending, DomainEvent::Verified)
            | (DomainState::Verified { .. }, DomainEvent::Verified) => {
                Ok(DomainState::Verified { ssl: true })
            }
            (state, event) => Err(PlatformError::InvalidTransition(format!(
                "domain {:?} -> {:?}",
                state, event
            ))),
        }
    }
}
