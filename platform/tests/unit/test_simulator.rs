//! Simulated lifecycle tests, run on a paused clock

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tokio_test::{assert_err, assert_ok};
use xistra::deploy::fsm::SimulationSettings;
use xistra::deploy::simulator::Simulator;
use xistra::errors::PlatformError;
use xistra::models::deployment::DeploymentStatus;
use xistra::models::domain::{DomainState, NewDomain};
use xistra::models::project::{NewProject, ProjectStatus};
use xistra::store::Stores;

fn setup() -> (Arc<Stores>, Simulator) {
    let stores = Arc::new(Stores::seeded());
    let simulator = Simulator::new(stores.clone(), SimulationSettings::default());
    (stores, simulator)
}

fn new_project(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        repository: "https://github.com/acme/storefront.git".to_string(),
        framework: "React".to_string(),
    }
}

fn new_domain(domain: &str, project_id: &str) -> NewDomain {
    NewDomain {
        domain: domain.to_string(),
        project_id: project_id.to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn test_create_project_builds_then_deploys() {
    let (stores, simulator) = setup();
    let before = stores.projects.len();

    let project = assert_ok!(simulator.create_project(new_project("shop")));
    assert_eq!(project.status, ProjectStatus::Building);
    assert!(project.url.is_none());
    assert_eq!(stores.projects.len(), before + 1);
    assert_eq!(stores.projects.list()[0].id, project.id);
    assert_eq!(
        stores
            .projects
            .select(|p| p.name == "shop")
            .len(),
        1
    );

    sleep(Duration::from_millis(2999)).await;
    let current = stores.projects.get(&project.id).unwrap();
    assert_eq!(current.status, ProjectStatus::Building);

    sleep(Duration::from_millis(2)).await;
    let current = stores.projects.get(&project.id).unwrap();
    assert_eq!(current.status, ProjectStatus::Deployed);
    assert_eq!(current.url.as_deref(), Some("https://shop.vercel.app"));
}

#[tokio::test(start_paused = true)]
async fn test_create_project_derives_name() {
    let (_stores, simulator) = setup();

    let project = assert_ok!(simulator.create_project(new_project("  ")));
    assert_eq!(project.name, "storefront");
}

#[tokio::test(start_paused = true)]
async fn test_create_project_validation() {
    let (stores, simulator) = setup();
    let before = stores.projects.len();

    let missing_framework = NewProject {
        framework: String::new(),
        ..new_project("shop")
    };
    let result = simulator.create_project(missing_framework);
    assert!(matches!(result, Err(PlatformError::ValidationError(_))));

    let bad_url = NewProject {
        repository: "not a url".to_string(),
        ..new_project("shop")
    };
    assert_err!(simulator.create_project(bad_url));

    assert_eq!(stores.projects.len(), before);
}

#[tokio::test(start_paused = true)]
async fn test_redeploy_project() {
    let (stores, simulator) = setup();

    // landing-page starts out failed and without a URL
    let project = assert_ok!(simulator.redeploy_project("3"));
    assert_eq!(project.status, ProjectStatus::Building);

    sleep(Duration::from_millis(1999)).await;
    assert_eq!(
        stores.projects.get("3").unwrap().status,
        ProjectStatus::Building
    );

    sleep(Duration::from_millis(2)).await;
    let current = stores.projects.get("3").unwrap();
    assert_eq!(current.status, ProjectStatus::Deployed);
    assert_eq!(
        current.url.as_deref(),
        Some("https://landing-page.vercel.app")
    );
}

#[tokio::test(start_paused = true)]
async fn test_redeploy_during_first_build() {
    let (stores, simulator) = setup();

    let project = assert_ok!(simulator.create_project(new_project("shop")));

    // Redeploy 1s in: the create timer (t=3s) is not cancelled, the redeploy timer fires at t=3s too
    sleep(Duration::from_millis(1000)).await;
    let redeployed = assert_ok!(simulator.redeploy_project(&project.id));
    assert_eq!(redeployed.status, ProjectStatus::Building);

    sleep(Duration::from_millis(1999)).await;
    assert_eq!(
        stores.projects.get(&project.id).unwrap().status,
        ProjectStatus::Building
    );

    sleep(Duration::from_millis(2)).await;
    let current = stores.projects.get(&project.id).unwrap();
    assert_eq!(current.status, ProjectStatus::Deployed);
    assert_eq!(current.url.as_deref(), Some("https://shop.vercel.app"));

    // A later redeploy overlapping an earlier one still ends deployed
    assert_ok!(simulator.redeploy_project(&project.id));
    sleep(Duration::from_millis(500)).await;
    assert_ok!(simulator.redeploy_project(&project.id));
    sleep(Duration::from_millis(1501)).await;
    assert_eq!(
        stores.projects.get(&project.id).unwrap().status,
        ProjectStatus::Deployed
    );
    sleep(Duration::from_millis(500)).await;
    let current = stores.projects.get(&project.id).unwrap();
    assert_eq!(current.status, ProjectStatus::Deployed);
    assert_eq!(current.url.as_deref(), Some("https://shop.vercel.app"));
}

#[tokio::test(start_paused = true)]
async fn test_redeploy_keeps_existing_url() {
    let (stores, simulator) = setup();

    assert_ok!(simulator.redeploy_project("1"));
    sleep(Duration::from_millis(2001)).await;

    let current = stores.projects.get("1").unwrap();
    assert_eq!(current.status, ProjectStatus::Deployed);
    assert_eq!(current.url.as_deref(), Some("https://mi-app-web.vercel.app"));
}

#[tokio::test(start_paused = true)]
async fn test_redeploy_unknown_project() {
    let (_stores, simulator) = setup();
    let result = simulator.redeploy_project("missing");
    assert!(matches!(result, Err(PlatformError::NotFound(_))));
}

#[tokio::test(start_paused = true)]
async fn test_redeploy_deployment() {
    let (stores, simulator) = setup();

    let deployment = assert_ok!(simulator.redeploy_deployment("3"));
    assert_eq!(deployment.status, DeploymentStatus::Building);

    sleep(Duration::from_millis(2001)).await;
    assert_eq!(
        stores.deployments.get("3").unwrap().status,
        DeploymentStatus::Success
    );
}

#[tokio::test(start_paused = true)]
async fn test_add_domain_verifies() {
    let (stores, simulator) = setup();

    let domain = assert_ok!(simulator.add_domain(new_domain("shop.example.com", "2")));
    assert_eq!(domain.state, DomainState::Pending);
    assert!(!domain.state.ssl());
    assert_eq!(domain.project_name, "api-backend");
    assert_eq!(stores.domains.list()[0].id, domain.id);

    sleep(Duration::from_millis(3001)).await;
    let current = stores.domains.get(&domain.id).unwrap();
    assert_eq!(current.state, DomainState::Verified { ssl: true });
}

#[tokio::test(start_paused = true)]
async fn test_add_domain_validation() {
    let (stores, simulator) = setup();
    let before = stores.domains.len();

    let result = simulator.add_domain(new_domain("", "1"));
    assert!(matches!(result, Err(PlatformError::ValidationError(_))));

    let result = simulator.add_domain(new_domain("shop.example.com", "404"));
    assert!(matches!(result, Err(PlatformError::NotFound(_))));

    assert_eq!(stores.domains.len(), before);
}

#[tokio::test(start_paused = true)]
async fn test_delete_domain_is_permanent() {
    let (stores, simulator) = setup();

    let domain = assert_ok!(simulator.add_domain(new_domain("gone.example.com", "1")));
    assert_ok!(simulator.delete_domain(&domain.id));
    assert!(!stores.domains.contains(&domain.id));

    // The pending verification must not bring it back
    sleep(Duration::from_millis(3001)).await;
    assert!(!stores.domains.contains(&domain.id));
    assert_err!(simulator.delete_domain(&domain.id));
}
