//! HTTP server setup

use std::future::Future;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::options::ServerOptions;
use crate::errors::PlatformError;
use crate::server::handlers::{
    account_handler, add_domain_handler, add_env_handler, create_project_handler,
    delete_domain_handler, delete_env_handler, dns_records_handler, export_logs_handler,
    get_project_handler, health_handler, list_deployments_handler, list_domains_handler,
    list_env_handler, list_logs_handler, list_projects_handler, log_projects_handler,
    project_deployments_handler, redeploy_deployment_handler, redeploy_project_handler,
    summary_handler, toggle_env_handler, update_notifications_handler, update_profile_handler,
    version_handler,
};
use crate::server::state::ServerState;

/// Build the API router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Health and version
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        // Dashboard
        .route("/dashboard/summary", get(summary_handler))
        // Projects
        .route(
            "/projects",
            get(list_projects_handler).post(create_project_handler),
        )
        .route("/projects/{id}", get(get_project_handler))
        .route("/projects/{id}/redeploy", post(redeploy_project_handler))
        .route("/projects/{id}/deployments", get(project_deployments_handler))
        .route(
            "/projects/{id}/env",
            get(list_env_handler).post(add_env_handler),
        )
        .route("/projects/{id}/env/{env_id}", delete(delete_env_handler))
        .route("/projects/{id}/env/{env_id}/toggle", post(toggle_env_handler))
        // Deployments
        .route("/deployments", get(list_deployments_handler))
        .route("/deployments/{id}/redeploy", post(redeploy_deployment_handler))
        // Domains
        .route(
            "/domains",
            get(list_domains_handler).post(add_domain_handler),
        )
        .route("/domains/{id}", delete(delete_domain_handler))
        .route("/domains/{id}/dns", get(dns_records_handler))
        // Logs
        .route("/logs", get(list_logs_handler))
        .route("/logs/export", get(export_logs_handler))
        .route("/logs/projects", get(log_projects_handler))
        // Account
        .route("/account", get(account_handler))
        .route("/account/profile", put(update_profile_handler))
        .route("/account/notifications", put(update_notifications_handler))
        // State and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn serve(
    options: &ServerOptions,
    state: Arc<ServerState>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<JoinHandle<Result<(), PlatformError>>, PlatformError> {
    let app = router(state);

    let addr = format!("{}:{}", options.host, options.port);
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| PlatformError::ServerError(e.to_string()))?;

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| PlatformError::ServerError(e.to_string()))
    });

    Ok(handle)
}
