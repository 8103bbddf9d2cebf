// Account HTTP routes: creation and login

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use campushub_storage::Database;

use crate::auth::{jwt, AuthConfig};
use crate::common::{error_response, internal_error, ErrorResponse, MessageResponse};
use crate::services::AccountService;

/// App state for account routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AccountService>,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: Arc<AuthConfig>) -> Self {
        Self {
            service: Arc::new(AccountService::new(db)),
            auth,
        }
    }
}

/// Create account routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/create-account", post(create_account))
        .route("/login", post(login))
        .with_state(state)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username OR email
    pub login: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    /// Canonical username, whichever identifier was used to log in
    pub username: String,
    /// Bearer token for user-scoped routes
    pub token: String,
}

/// POST /create-account - Create a new account
#[utoipa::path(
    post,
    path = "/create-account",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created successfully", body = MessageResponse),
        (status = 400, description = "User already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "accounts"
)]
pub async fn create_account(
    State(state): State<AppState>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), (StatusCode, Json<ErrorResponse>)> {
    state
        .service
        .create_account(&req.username, &req.email, &req.password)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Account created successfully")),
    ))
}

/// POST /login - Verify credentials and issue a bearer token
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "accounts"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    let username = state
        .service
        .login(&req.login, &req.password)
        .await
        .map_err(error_response)?;

    let token = jwt::issue_token(&username, &state.auth).map_err(|e| {
        tracing::error!("Failed to issue token: {}", e);
        internal_error()
    })?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        username,
        token,
    }))
}
