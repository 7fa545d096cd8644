//! Mock data the dashboard starts with

use chrono::{DateTime, Duration, NaiveDate, Utc};
use secrecy::SecretString;

use crate::models::account::{Account, ApiKey, NotificationPreferences, Profile};
use crate::models::deployment::{Deployment, DeploymentStatus};
use crate::models::domain::{Domain, DomainState};
use crate::models::env::EnvVar;
use crate::models::log::{LogEntry, LogSeverity};
use crate::models::project::{Project, ProjectStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(h, min, s)
        .map(|t| t.and_utc())
        .unwrap_or_default()
}

pub fn projects(now: DateTime<Utc>) -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "mi-app-web".to_string(),
            repository: "github.com/usuario/mi-app-web".to_string(),
            framework: "React".to_string(),
            status: ProjectStatus::Deployed,
            last_deploy_at: now - Duration::hours(2),
            url: Some("https://mi-app-web.vercel.app".to_string()),
        },
        Project {
            id: "2".to_string(),
            name: "api-backend".to_string(),
            repository: "github.com/usuario/api-backend".to_string(),
            framework: "Node.js".to_string(),
            status: ProjectStatus::Building,
            last_deploy_at: now - Duration::minutes(5),
            url: None,
        },
        Project {
            id: "3".to_string(),
            name: "landing-page".to_string(),
            repository: "github.com/usuario/landing-page".to_string(),
            framework: "Next.js".to_string(),
            status: ProjectStatus::Failed,
            last_deploy_at: now - Duration::days(1),
            url: None,
        },
    ]
}

pub fn deployments() -> Vec<Deployment> {
    let deployment = |id: &str,
                      project_id: &str,
                      project_name: &str,
                      status: DeploymentStatus,
                      created_at: DateTime<Utc>,
                      duration: &str,
                      commit: &str,
                      url: Option<&str>| Deployment {
        id: id.to_string(),
        project_id: project_id.to_string(),
        project_name: project_name.to_string(),
        status,
        created_at,
        duration: duration.to_string(),
        branch: "main".to_string(),
        commit: commit.to_string(),
        url: url.map(str::to_string),
    };

    vec![
        deployment(
            "1",
            "1",
            "mi-app-web",
            DeploymentStatus::Success,
            at(2024, 1, 15, 10, 30, 0),
            "2m 15s",
            "feat: add new homepage design",
            Some("https://mi-app-web-abc123.vercel.app"),
        ),
        deployment(
            "2",
            "2",
            "api-backend",
            DeploymentStatus::Building,
            at(2024, 1, 15, 10, 25, 0),
            "1m 45s",
            "fix: update API endpoints",
            None,
        ),
        deployment(
            "3",
            "3",
            "landing-page",
            DeploymentStatus::Failed,
            at(2024, 1, 14, 15, 20, 0),
            "45s",
            "refactor: optimize images",
            None,
        ),
        deployment(
            "4",
            "1",
            "mi-app-web",
            DeploymentStatus::Success,
            at(2024, 1, 14, 8, 15, 0),
            "1m 30s",
            "chore: update dependencies",
            Some("https://mi-app-web-def456.vercel.app"),
        ),
    ]
}

pub fn domains() -> Vec<Domain> {
    vec![
        Domain {
            id: "1".to_string(),
            domain: "mi-app-web.com".to_string(),
            project_id: "1".to_string(),
            project_name: "mi-app-web".to_string(),
            state: DomainState::Verified { ssl: true },
            created_at: date(2024, 1, 10),
        },
        Domain {
            id: "2".to_string(),
            domain: "staging.mi-app-web.com".to_string(),
            project_id: "1".to_string(),
            project_name: "mi-app-web".to_string(),
            state: DomainState::Pending,
            created_at: date(2024, 1, 15),
        },
    ]
}

pub fn logs() -> Vec<LogEntry> {
    let entry = |id: &str,
                 timestamp: DateTime<Utc>,
                 level: LogSeverity,
                 message: &str,
                 project_id: &str,
                 project_name: &str,
                 deployment_id: &str| LogEntry {
        id: id.to_string(),
        timestamp,
        level,
        message: message.to_string(),
        project_id: project_id.to_string(),
        project_name: project_name.to_string(),
        deployment_id: deployment_id.to_string(),
    };

    vec![
        entry(
            "1",
            at(2024, 1, 15, 10, 32, 45),
            LogSeverity::Success,
            "Deployment completed successfully",
            "1",
            "mi-app-web",
            "dep_123",
        ),
        entry(
            "2",
            at(2024, 1, 15, 10, 32, 30),
            LogSeverity::Info,
            "Building application...",
            "1",
            "mi-app-web",
            "dep_123",
        ),
        entry(
            "3",
            at(2024, 1, 15, 10, 32, 15),
            LogSeverity::Info,
            "Installing dependencies with npm",
            "1",
            "mi-app-web",
            "dep_123",
        ),
        entry(
            "4",
            at(2024, 1, 15, 10, 26, 20),
            LogSeverity::Error,
            "Build failed: Module not found: Error: Can't resolve './missing-file'",
            "2",
            "api-backend",
            "dep_124",
        ),
        entry(
            "5",
            at(2024, 1, 15, 10, 26, 10),
            LogSeverity::Warning,
            "Deprecated package detected: Please update your dependencies",
            "2",
            "api-backend",
            "dep_124",
        ),
        entry(
            "6",
            at(2024, 1, 14, 15, 22, 30),
            LogSeverity::Error,
            "Failed to optimize images: Invalid image format",
            "3",
            "landing-page",
            "dep_125",
        ),
    ]
}

pub fn env_vars() -> Vec<EnvVar> {
    [
        ("1", "API_URL", "https://api.example.com"),
        ("2", "DATABASE_URL", "postgres://..."),
    ]
    .into_iter()
    .map(|(id, key, value)| EnvVar {
        id: id.to_string(),
        project_id: "1".to_string(),
        key: key.to_string(),
        value: SecretString::from(value.to_string()),
        visible: false,
    })
    .collect()
}

pub fn account(now: DateTime<Utc>) -> Account {
    Account {
        profile: Profile {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            plan: "Pro".to_string(),
        },
        notifications: NotificationPreferences::default(),
        api_keys: vec![
            ApiKey {
                id: "1".to_string(),
                name: "Production API".to_string(),
                created: date(2024, 1, 10),
                last_used_at: now - Duration::hours(2),
            },
            ApiKey {
                id: "2".to_string(),
                name: "Development API".to_string(),
                created: date(2024, 1, 5),
                last_used_at: now - Duration::days(3),
            },
        ],
    }
}
