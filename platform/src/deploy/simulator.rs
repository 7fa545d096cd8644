//! Simulated deployment backend
//!
//! Every mutation that would hit a real build pipeline or DNS verifier applies
//! its first state immediately and schedules the completion as a delayed,
//! fire-and-forget task. A scheduled completion cannot be cancelled; when it
//! fires it overwrites whatever record currently carries its id.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};
use url::Url;

use crate::deploy::fsm::{BuildEvent, DomainEvent, SimulationSettings};
use crate::errors::PlatformError;
use crate::models::deployment::Deployment;
use crate::models::domain::{Domain, DomainState, NewDomain};
use crate::models::project::{repo_name, NewProject, Project, ProjectStatus};
use crate::store::Stores;
use crate::utils::generate_uuid;

/// Drives the simulated lifecycle of projects, deployments and domains
pub struct Simulator {
    stores: Arc<Stores>,
    settings: SimulationSettings,
}

impl Simulator {
    pub fn new(stores: Arc<Stores>, settings: SimulationSettings) -> Self {
        Self { stores, settings }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn stores(&self) -> &Arc<Stores> {
        &self.stores
    }

    /// Create a project in `building` state and schedule its first deploy.
    pub fn create_project(&self, request: NewProject) -> Result<Project, PlatformError> {
        let repository = request.repository.trim().to_string();
        let framework = request.framework.trim().to_string();
        if repository.is_empty() || framework.is_empty() {
            return Err(PlatformError::ValidationError(
                "repository and framework are required".to_string(),
            ));
        }
        Url::parse(&repository).map_err(|e| {
            PlatformError::ValidationError(format!("invalid repository URL '{}': {}", repository, e))
        })?;

        let name = match request.name.trim() {
            "" => repo_name(&repository).ok_or_else(|| {
                PlatformError::ValidationError(format!(
                    "cannot derive a project name from '{}'",
                    repository
                ))
            })?,
            name => name.to_string(),
        };

        let project = Project {
            id: generate_uuid(),
            name,
            repository,
            framework,
            status: ProjectStatus::Building,
            last_deploy_at: Utc::now(),
            url: None,
        };
        self.stores.projects.insert_front(project.clone());
        info!("Created project {} ({}), building...", project.name, project.id);

        let url = self.settings.preview_url(&project.name);
        let id = project.id.clone();
        self.schedule(self.settings.build_delay, move |stores| {
            finish_project_build(stores, &id, url)
        });

        Ok(project)
    }

    /// Rebuild a project: `building` now, `deployed` after the redeploy delay
    pub fn redeploy_project(&self, id: &str) -> Result<Project, PlatformError> {
        let project = self.stores.projects.update(id, |project| {
            project.status = project.status.apply(BuildEvent::Deploy)?;
            project.last_deploy_at = Utc::now();
            Ok(project.clone())
        })?;
        info!("Redeploying project {} ({})", project.name, project.id);

        let url = self.settings.preview_url(&project.name);
        let id = project.id.clone();
        self.schedule(self.settings.redeploy_delay, move |stores| {
            finish_project_build(stores, &id, url)
        });

        Ok(project)
    }

    /// Re-run a deployment from the history
    pub fn redeploy_deployment(&self, id: &str) -> Result<Deployment, PlatformError> {
        let deployment = self.stores.deployments.update(id, |deployment| {
            deployment.status = deployment.status.apply(BuildEvent::Deploy)?;
            Ok(deployment.clone())
        })?;
        info!(
            "Redeploying deployment {} of {}",
            deployment.id, deployment.project_name
        );

        let id = deployment.id.clone();
        self.schedule(self.settings.redeploy_delay, move |stores| {
            let result = stores.deployments.update(&id, |deployment| {
                deployment.status = deployment.status.apply(BuildEvent::BuildSucceeded)?;
                Ok(())
            });
            match result {
                Ok(()) => info!("Deployment {} succeeded", id),
                Err(e) => warn!("Dropping completion of deployment {}: {}", id, e),
            }
        });

        Ok(deployment)
    }

    /// Attach a domain to a project and schedule its verification
    pub fn add_domain(&self, request: NewDomain) -> Result<Domain, PlatformError> {
        let hostname = request.domain.trim().to_lowercase();
        let project_id = request.project_id.trim();
        if hostname.is_empty() || project_id.is_empty() {
            return Err(PlatformError::ValidationError(
                "domain and project are required".to_string(),
            ));
        }
        let project_name = self
            .stores
            .projects
            .name_of(project_id)
            .ok_or_else(|| PlatformError::not_found("project", project_id))?;

        let domain = Domain {
            id: generate_uuid(),
            domain: hostname,
            project_id: project_id.to_string(),
            project_name,
            state: DomainState::Pending,
            created_at: Utc::now().date_naive(),
        };
        self.stores.domains.insert_front(domain.clone());
        info!("Added domain {} to {}, pending verification", domain.domain, domain.project_name);

        let id = domain.id.clone();
        self.schedule(self.settings.verify_delay, move |stores| {
            let result = stores.domains.update(&id, |domain| {
                domain.state = domain.state.apply(DomainEvent::Verified)?;
                Ok(domain.domain.clone())
            });
            match result {
                Ok(hostname) => info!("Domain {} verified, certificate issued", hostname),
                Err(PlatformError::NotFound(_)) => {
                    debug!("Domain {} was deleted before verification", id)
                }
                Err(e) => warn!("Dropping verification of domain {}: {}", id, e),
            }
        });

        Ok(domain)
    }

    /// Remove a domain immediately
    pub fn delete_domain(&self, id: &str) -> Result<Domain, PlatformError> {
        let domain = self.stores.domains.remove(id)?;
        info!("Deleted domain {}", domain.domain);
        Ok(domain)
    }

    fn schedule<F>(&self, delay: Duration, transition: F)
    where
        F: FnOnce(&Stores) + Send + 'static,
    {
        let stores = self.stores.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            transition(&stores);
        });
    }
}

fn finish_project_build(stores: &Stores, id: &str, url: String) {
    let result = stores.projects.update(id, |project| {
        project.status = project.status.apply(BuildEvent::BuildSucceeded)?;
        project.url.get_or_insert(url);
        Ok(project.name.clone())
    });
    match result {
        Ok(name) => info!("Project {} deployed", name),
        Err(e) => warn!("Dropping build completion of project {}: {}", id, e),
    }
}
