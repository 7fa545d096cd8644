//! In-memory stores

pub mod account;
pub mod deployments;
pub mod domains;
pub mod env;
pub mod logs;
pub mod projects;
pub mod records;
pub mod seed;

use chrono::Utc;

use crate::errors::PlatformError;
use crate::models::account::{Account, NotificationPreferences, Profile};
use crate::models::env::{EnvVarView, NewEnvVar};
use crate::store::account::AccountStore;
use crate::store::deployments::DeploymentStore;
use crate::store::domains::DomainStore;
use crate::store::env::EnvStore;
use crate::store::logs::LogStore;
use crate::store::projects::ProjectStore;

/// All platform state
pub struct Stores {
    pub projects: ProjectStore,
    pub deployments: DeploymentStore,
    pub domains: DomainStore,
    pub logs: LogStore,
    pub env_vars: EnvStore,
    pub account: AccountStore,
}

impl Stores {
    /// Stores holding the dashboard's mock data
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self {
            projects: ProjectStore::with_entries(seed::projects(now)),
            deployments: DeploymentStore::with_entries(seed::deployments()),
            domains: DomainStore::with_entries(seed::domains()),
            logs: LogStore::with_entries(seed::logs()),
            env_vars: EnvStore::with_entries(seed::env_vars()),
            account: AccountStore::new(seed::account(now)),
        }
    }

    /// Stores with no records and a default account
    pub fn empty() -> Self {
        Self {
            projects: ProjectStore::new(),
            deployments: DeploymentStore::new(),
            domains: DomainStore::new(),
            logs: LogStore::new(),
            env_vars: EnvStore::new(),
            account: AccountStore::new(Account {
                profile: Profile {
                    name: "Owner".to_string(),
                    email: "owner@example.com".to_string(),
                    plan: "Hobby".to_string(),
                },
                notifications: NotificationPreferences::default(),
                api_keys: Vec::new(),
            }),
        }
    }

    fn ensure_project(&self, project_id: &str) -> Result<(), PlatformError> {
        if self.projects.contains(project_id) {
            Ok(())
        } else {
            Err(PlatformError::not_found("project", project_id))
        }
    }

    pub fn env_vars_of(&self, project_id: &str) -> Result<Vec<EnvVarView>, PlatformError> {
        self.ensure_project(project_id)?;
        Ok(self.env_vars.for_project(project_id))
    }

    pub fn add_env_var(
        &self,
        project_id: &str,
        request: NewEnvVar,
    ) -> Result<EnvVarView, PlatformError> {
        self.ensure_project(project_id)?;
        self.env_vars.add(project_id, request)
    }
}
