// Event catalog HTTP routes

use axum::http::HeaderMap;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use campushub_core::Event;

use crate::auth::bearer_token;
use crate::common::{error_response, ErrorResponse};
use crate::services::EventService;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
    /// Set only when ADMIN_TOKEN is configured; gates the reset route
    pub admin_token: Option<Arc<String>>,
}

/// Create event routes. The destructive reset route exists only when an
/// admin token is configured.
pub fn routes(state: AppState) -> Router {
    let mut router = Router::new().route("/events", get(list_events));

    if state.admin_token.is_some() {
        router = router.route("/admin/events/reset", post(reset_events));
    }

    router.with_state(state)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResetResponse {
    pub message: String,
    /// Number of catalog entries after the reset
    pub count: u64,
}

/// GET /events - List every event in the catalog
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "All catalog events", body = Vec<Event>),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, (StatusCode, Json<ErrorResponse>)> {
    let events = state.service.list().await.map_err(error_response)?;

    Ok(Json(events))
}

/// POST /admin/events/reset - Drop the catalog and reinsert the default set
#[utoipa::path(
    post,
    path = "/admin/events/reset",
    responses(
        (status = 200, description = "Catalog reset to the default set", body = ResetResponse),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn reset_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ResetResponse>, (StatusCode, Json<ErrorResponse>)> {
    let authorized = match (&state.admin_token, bearer_token(&headers)) {
        (Some(expected), Some(token)) => token == expected.as_str(),
        _ => false,
    };
    if !authorized {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Admin token required")),
        ));
    }

    let count = state.service.reset().await.map_err(error_response)?;
    tracing::info!(count, "Event catalog reset to defaults");

    Ok(Json(ResetResponse {
        message: "Default events inserted successfully".to_string(),
        count,
    }))
}
