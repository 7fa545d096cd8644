//! Store and filtering tests against the seeded data

use xistra::filter::{Choice, DeploymentQuery, LogQuery, ProjectQuery};
use xistra::models::deployment::DeploymentStatus;
use xistra::models::log::LogSeverity;
use xistra::models::project::ProjectStatus;
use xistra::store::Stores;

fn project_query(search: &str) -> ProjectQuery {
    ProjectQuery {
        search: search.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_filter_projects_by_substring() {
    let stores = Stores::seeded();

    let projects = stores.projects.filter(&project_query("api"));
    assert_eq!(projects.len(), 1);
    for project in &projects {
        let haystack = format!("{} {}", project.name, project.framework).to_lowercase();
        assert!(haystack.contains("api"));
    }

    // Case-insensitive, matches the framework too
    let projects = stores.projects.filter(&project_query("NEXT"));
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "landing-page");

    assert_eq!(stores.projects.filter(&project_query("")).len(), 3);
    assert!(stores.projects.filter(&project_query("django")).is_empty());
}

#[test]
fn test_filter_projects_by_status() {
    let stores = Stores::seeded();
    let query = ProjectQuery {
        status: Choice::Only(ProjectStatus::Failed),
        ..Default::default()
    };

    let projects = stores.projects.filter(&query);
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].status, ProjectStatus::Failed);
}

#[test]
fn test_filter_deployments() {
    let stores = Stores::seeded();

    let query = DeploymentQuery {
        search: "dependencies".to_string(),
        ..Default::default()
    };
    let deployments = stores.deployments.filter(&query);
    assert_eq!(deployments.len(), 1);
    assert_eq!(deployments[0].id, "4");

    let query = DeploymentQuery {
        search: "mi-app".to_string(),
        status: Choice::Only(DeploymentStatus::Success),
    };
    assert_eq!(stores.deployments.filter(&query).len(), 2);

    assert_eq!(stores.deployments.for_project("1").len(), 2);
}

#[test]
fn test_filter_logs_by_level() {
    let stores = Stores::seeded();
    let query = LogQuery {
        level: Choice::Only(LogSeverity::Error),
        ..Default::default()
    };

    let logs = stores.logs.filter(&query);
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|entry| entry.level == LogSeverity::Error));
}

#[test]
fn test_filter_logs_by_project_and_search() {
    let stores = Stores::seeded();

    let by_name = LogQuery {
        project: Choice::Only("api-backend".to_string()),
        ..Default::default()
    };
    let by_id = LogQuery {
        project: Choice::Only("2".to_string()),
        ..Default::default()
    };
    assert_eq!(stores.logs.filter(&by_name), stores.logs.filter(&by_id));
    assert_eq!(stores.logs.filter(&by_name).len(), 2);

    let query = LogQuery {
        search: "NPM".to_string(),
        ..Default::default()
    };
    let logs = stores.logs.filter(&query);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].id, "3");
}

#[test]
fn test_export_logs() {
    let stores = Stores::seeded();
    let query = LogQuery {
        level: Choice::Only(LogSeverity::Warning),
        ..Default::default()
    };

    let export = stores.logs.export(&query);
    assert_eq!(
        export,
        "[2024-01-15T10:26:10+00:00] WARNING api-backend (dep_124): \
         Deprecated package detected: Please update your dependencies\n"
    );
}

#[test]
fn test_log_project_names() {
    let stores = Stores::seeded();
    assert_eq!(
        stores.logs.project_names(),
        vec!["mi-app-web", "api-backend", "landing-page"]
    );
}

#[test]
fn test_env_vars_require_known_project() {
    let stores = Stores::seeded();
    assert_eq!(stores.env_vars_of("1").unwrap().len(), 2);
    assert!(stores.env_vars_of("404").is_err());
}
