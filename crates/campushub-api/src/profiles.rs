// Profile HTTP routes: event registration and profile lookup
//
// Both routes are user-scoped: with auth enforced, the bearer token's
// subject must match the username in the path.

use axum::http::HeaderMap;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use campushub_core::Profile;
use campushub_storage::Database;

use crate::auth::{self, AuthConfig};
use crate::common::{error_response, ErrorResponse, MessageResponse};
use crate::services::ProfileService;

/// App state for profile routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProfileService>,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: Arc<AuthConfig>) -> Self {
        Self {
            service: Arc::new(ProfileService::new(db)),
            auth,
        }
    }
}

/// Create profile routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/register-event/:username", post(register_event))
        .route("/profile/:username", get(get_profile))
        .with_state(state)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterEventRequest {
    /// Catalog event id in string form
    pub event_id: String,
}

/// POST /register-event/{username} - Append a registration snapshot
#[utoipa::path(
    post,
    path = "/register-event/{username}",
    params(
        ("username" = String, Path, description = "Username to register")
    ),
    request_body = RegisterEventRequest,
    responses(
        (status = 200, description = "Event registered successfully", body = MessageResponse),
        (status = 400, description = "Malformed event id", body = ErrorResponse),
        (status = 404, description = "User or event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "profiles"
)]
pub async fn register_event(
    State(state): State<AppState>,
    Path(username): Path<String>,
    headers: HeaderMap,
    Json(req): Json<RegisterEventRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    auth::require_user(&headers, &state.auth, &username)?;

    state
        .service
        .register_event(&username, &req.event_id)
        .await
        .map_err(error_response)?;

    Ok(Json(MessageResponse::new("Event registered successfully")))
}

/// GET /profile/{username} - Fetch a user's profile
#[utoipa::path(
    get,
    path = "/profile/{username}",
    params(
        ("username" = String, Path, description = "Username to look up")
    ),
    responses(
        (status = 200, description = "Profile found", body = Profile),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "profiles"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Profile>, (StatusCode, Json<ErrorResponse>)> {
    auth::require_user(&headers, &state.auth, &username)?;

    let profile = state
        .service
        .get_profile(&username)
        .await
        .map_err(error_response)?;

    Ok(Json(profile))
}
