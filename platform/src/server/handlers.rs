//! HTTP request handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dashboard::summarize;
use crate::errors::PlatformError;
use crate::filter::{DeploymentQuery, LogQuery, ProjectQuery};
use crate::models::account::{NotificationPreferences, ProfileUpdate};
use crate::models::domain::{dns_records, NewDomain};
use crate::models::env::NewEnvVar;
use crate::models::project::{NewProject, ProjectView};
use crate::server::state::ServerState;
use crate::utils::version_info;

/// Error body returned for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        let status = match &self {
            PlatformError::ValidationError(_) => StatusCode::BAD_REQUEST,
            PlatformError::NotFound(_) => StatusCode::NOT_FOUND,
            PlatformError::InvalidTransition(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        debug!("Request failed with {}: {}", status, self);
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    let version = version_info();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "xistra".to_string(),
        version: version.version,
    })
}

/// Version handler
pub async fn version_handler() -> impl IntoResponse {
    Json(version_info())
}

/// Dashboard summary handler
pub async fn summary_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(summarize(&state.stores))
}

// ================================= PROJECTS ===================================== //

/// Projects response
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectView>,
    pub total: usize,
}

pub async fn list_projects_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ProjectQuery>,
) -> impl IntoResponse {
    let now = Utc::now();
    let projects: Vec<ProjectView> = state
        .stores
        .projects
        .filter(&query)
        .iter()
        .map(|p| p.to_view(now))
        .collect();
    let total = projects.len();

    Json(ProjectsResponse { projects, total })
}

pub async fn create_project_handler(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<NewProject>,
) -> Result<impl IntoResponse, PlatformError> {
    let project = state.simulator.create_project(request)?;
    Ok((StatusCode::CREATED, Json(project.to_view(Utc::now()))))
}

pub async fn get_project_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PlatformError> {
    let project = state.stores.projects.get(&id)?;
    Ok(Json(project.to_view(Utc::now())))
}

pub async fn redeploy_project_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PlatformError> {
    let project = state.simulator.redeploy_project(&id)?;
    Ok((StatusCode::ACCEPTED, Json(project.to_view(Utc::now()))))
}

pub async fn project_deployments_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PlatformError> {
    state.stores.projects.get(&id)?;
    Ok(Json(state.stores.deployments.for_project(&id)))
}

// =========================== ENVIRONMENT VARIABLES ============================== //

pub async fn list_env_handler(
    State(state): State<Arc<ServerState>>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, PlatformError> {
    Ok(Json(state.stores.env_vars_of(&project_id)?))
}

pub async fn add_env_handler(
    State(state): State<Arc<ServerState>>,
    Path(project_id): Path<String>,
    Json(request): Json<NewEnvVar>,
) -> Result<impl IntoResponse, PlatformError> {
    let var = state.stores.add_env_var(&project_id, request)?;
    Ok((StatusCode::CREATED, Json(var)))
}

pub async fn toggle_env_handler(
    State(state): State<Arc<ServerState>>,
    Path((project_id, env_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, PlatformError> {
    Ok(Json(
        state.stores.env_vars.toggle_visibility(&project_id, &env_id)?,
    ))
}

pub async fn delete_env_handler(
    State(state): State<Arc<ServerState>>,
    Path((project_id, env_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, PlatformError> {
    state.stores.env_vars.delete(&project_id, &env_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ================================ DEPLOYMENTS =================================== //

pub async fn list_deployments_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<DeploymentQuery>,
) -> impl IntoResponse {
    Json(state.stores.deployments.filter(&query))
}

pub async fn redeploy_deployment_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PlatformError> {
    let deployment = state.simulator.redeploy_deployment(&id)?;
    Ok((StatusCode::ACCEPTED, Json(deployment)))
}

// ================================== DOMAINS ===================================== //

#[derive(Debug, Deserialize)]
pub struct DomainQuery {
    pub project_id: Option<String>,
}

pub async fn list_domains_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<DomainQuery>,
) -> impl IntoResponse {
    let domains = match query.project_id.as_deref() {
        Some(project_id) if !project_id.is_empty() => {
            state.stores.domains.for_project(project_id)
        }
        _ => state.stores.domains.list(),
    };
    Json(domains)
}

pub async fn add_domain_handler(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<NewDomain>,
) -> Result<impl IntoResponse, PlatformError> {
    let domain = state.simulator.add_domain(request)?;
    Ok((StatusCode::CREATED, Json(domain)))
}

pub async fn delete_domain_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PlatformError> {
    state.simulator.delete_domain(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn dns_records_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PlatformError> {
    let domain = state.stores.domains.get(&id)?;
    Ok(Json(dns_records(&domain.domain)))
}

// =================================== LOGS ======================================= //

pub async fn list_logs_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<LogQuery>,
) -> impl IntoResponse {
    Json(state.stores.logs.filter(&query))
}

pub async fn export_logs_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<LogQuery>,
) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"logs.txt\""),
        ],
        state.stores.logs.export(&query),
    )
}

pub async fn log_projects_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(state.stores.logs.project_names())
}

// ================================== ACCOUNT ===================================== //

pub async fn account_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(state.stores.account.get())
}

pub async fn update_profile_handler(
    State(state): State<Arc<ServerState>>,
    Json(update): Json<ProfileUpdate>,
) -> Result<impl IntoResponse, PlatformError> {
    Ok(Json(state.stores.account.update_profile(update)?))
}

pub async fn update_notifications_handler(
    State(state): State<Arc<ServerState>>,
    Json(preferences): Json<NotificationPreferences>,
) -> impl IntoResponse {
    Json(state.stores.account.update_notifications(preferences))
}
