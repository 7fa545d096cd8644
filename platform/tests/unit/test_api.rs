//! HTTP API tests, driven in-process through the router

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use xistra::deploy::fsm::SimulationSettings;
use xistra::deploy::simulator::Simulator;
use xistra::server::serve::router;
use xistra::server::state::ServerState;
use xistra::store::Stores;

fn app() -> Router {
    let stores = Arc::new(Stores::seeded());
    let simulator = Arc::new(Simulator::new(stores.clone(), SimulationSettings::default()));
    router(Arc::new(ServerState::new(stores, simulator)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "xistra");
}

#[tokio::test]
async fn test_list_projects_with_search() {
    let app = app();

    let (status, body) = get(&app, "/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["projects"][0]["lastDeploy"], "2 hours ago");

    let (_, body) = get(&app, "/projects?search=API").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["projects"][0]["name"], "api-backend");

    let (_, body) = get(&app, "/projects?status=all&search=").await;
    assert_eq!(body["total"], 3);

    let (status, _) = get(&app, "/projects?status=exploded").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn test_create_project_lifecycle() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/projects",
        Some(json!({
            "name": "shop",
            "repository": "https://github.com/acme/shop.git",
            "framework": "Next.js"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "building");
    assert_eq!(body["lastDeploy"], "just now");
    assert!(body.get("url").is_none());
    let id = body["id"].as_str().unwrap().to_string();

    tokio::time::sleep(Duration::from_millis(3001)).await;

    let (status, body) = get(&app, &format!("/projects/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "deployed");
    assert_eq!(body["url"], "https://shop.vercel.app");
}

#[tokio::test]
async fn test_create_project_rejects_blank_fields() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/projects",
        Some(json!({ "name": "shop", "repository": "", "framework": "React" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn test_unknown_project() {
    let app = app();

    let (status, body) = get(&app, "/projects/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found: project 'nope'");

    let (status, _) = send(&app, Method::POST, "/projects/nope/redeploy", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn test_redeploy_project() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/projects/1/redeploy", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "building");

    tokio::time::sleep(Duration::from_millis(2001)).await;
    let (_, body) = get(&app, "/projects/1").await;
    assert_eq!(body["status"], "deployed");
}

#[tokio::test(start_paused = true)]
async fn test_domain_lifecycle() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/domains",
        Some(json!({ "domain": "shop.example.com", "projectId": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["ssl"], false);
    let id = body["id"].as_str().unwrap().to_string();

    let (_, body) = get(&app, &format!("/domains/{}/dns", id)).await;
    assert_eq!(body[0]["type"], "A");
    assert_eq!(body[0]["value"], "185.158.133.1");
    assert_eq!(body[1]["value"], "shop.example.com");

    tokio::time::sleep(Duration::from_millis(3001)).await;

    let (_, body) = get(&app, "/domains?project_id=1").await;
    let domains = body.as_array().unwrap();
    assert_eq!(domains.len(), 3);
    assert_eq!(domains[0]["id"], id.as_str());
    assert_eq!(domains[0]["status"], "verified");
    assert_eq!(domains[0]["ssl"], true);
}

#[tokio::test]
async fn test_delete_domain() {
    let app = app();

    let (status, _) = send(&app, Method::DELETE, "/domains/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = get(&app, "/domains").await;
    let domains = body.as_array().unwrap();
    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0]["id"], "2");

    let (status, _) = send(&app, Method::DELETE, "/domains/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_deployments() {
    let app = app();

    let (status, body) = get(&app, "/deployments?status=failed").await;
    assert_eq!(status, StatusCode::OK);
    let deployments = body.as_array().unwrap();
    assert_eq!(deployments.len(), 1);
    assert_eq!(deployments[0]["projectName"], "landing-page");

    let (_, body) = get(&app, "/projects/1/deployments").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_filter_and_export_logs() {
    let app = app();

    let (status, body) = get(&app, "/logs?level=error").await;
    assert_eq!(status, StatusCode::OK);
    let logs = body.as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|entry| entry["level"] == "error"));

    let (status, body) = get(&app, "/logs/export?project=landing-page").await;
    assert_eq!(status, StatusCode::OK);
    let text = body.as_str().unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("ERROR landing-page (dep_125)"));

    let (status, _) = get(&app, "/logs?level=warn").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_env_vars() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/projects/1/env",
        Some(json!({ "key": "STRIPE_KEY", "value": "sk_test_123" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["visible"], false);
    assert_ne!(body["value"], "sk_test_123");
    let id = body["id"].as_str().unwrap().to_string();

    let toggle = format!("/projects/1/env/{}/toggle", id);
    let (_, body) = send(&app, Method::POST, &toggle, None).await;
    assert_eq!(body["value"], "sk_test_123");

    let (_, body) = get(&app, "/projects/1/env").await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _) = send(&app, Method::DELETE, &format!("/projects/1/env/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::POST,
        "/projects/1/env",
        Some(json!({ "key": "EMPTY", "value": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/projects/404/env").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_account() {
    let app = app();

    let (_, body) = get(&app, "/account").await;
    assert_eq!(body["profile"]["plan"], "Pro");
    assert_eq!(body["apiKeys"].as_array().unwrap().len(), 2);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/account/profile",
        Some(json!({ "name": "Jane Roe", "email": "jane@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jane Roe");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/account/notifications",
        Some(json!({ "deployments": false, "failures": true, "weekly": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weekly"], true);

    let (_, body) = get(&app, "/account").await;
    assert_eq!(body["profile"]["email"], "jane@example.com");
    assert_eq!(body["notifications"]["deployments"], false);
}

#[tokio::test]
async fn test_dashboard_summary() {
    let app = app();

    let (status, body) = get(&app, "/dashboard/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projects"]["total"], 3);
    assert_eq!(body["domains"]["verified"], 1);
    assert_eq!(body["recentActivity"].as_array().unwrap().len(), 5);
}
