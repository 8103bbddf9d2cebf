// Campushub API server
// Decision: Idempotent catalog seed at startup; the destructive reset is a
// separate admin endpoint, never merged into the seed
// Decision: Chat routes exist only when the Gemini client is configured

mod accounts;
mod auth;
mod chat;
mod common;
mod events;
mod profiles;
mod services;

use anyhow::{Context, Result};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use campushub_assistant::{ChatAgent, GeminiClient};
use campushub_storage::Database;

use crate::common::MessageResponse;
use crate::services::EventService;

async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new("Campushub event API is running"))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    auth_mode: String,
}

/// State for health endpoint
#[derive(Clone)]
struct HealthState {
    auth_mode: String,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        auth_mode: state.auth_mode.clone(),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        accounts::create_account,
        accounts::login,
        events::list_events,
        events::reset_events,
        profiles::register_event,
        profiles::get_profile,
        chat::chat,
        chat::reset_chat,
    ),
    components(
        schemas(
            campushub_core::Event,
            campushub_core::Registration,
            campushub_core::Profile,
            accounts::CreateAccountRequest,
            accounts::LoginRequest,
            accounts::LoginResponse,
            profiles::RegisterEventRequest,
            events::ResetResponse,
            chat::ChatRequest,
            chat::ChatResponse,
            common::MessageResponse,
            common::ErrorResponse,
        )
    ),
    tags(
        (name = "accounts", description = "Account creation and login"),
        (name = "events", description = "Event catalog endpoints"),
        (name = "profiles", description = "Registration and profile endpoints"),
        (name = "chat", description = "Campus assistant endpoints")
    ),
    info(
        title = "Campushub API",
        version = "0.1.0",
        description = "Student event registration API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campushub_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("campushub-api starting...");

    // Initialize database
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    db.migrate().await.context("Failed to run migrations")?;

    let db = Arc::new(db);

    // Idempotent startup seed
    let event_service = EventService::new(db.clone());
    if event_service
        .seed_defaults()
        .await
        .context("Failed to seed event catalog")?
    {
        tracing::info!("Seeded default event catalog");
    } else {
        tracing::info!("Event catalog already present, skipping seed");
    }

    // Load authentication configuration
    let auth = Arc::new(auth::AuthConfig::from_env());
    tracing::info!(mode = ?auth.mode, "Authentication configured");

    // The destructive catalog reset stays disabled unless a token is set
    let admin_token = std::env::var("ADMIN_TOKEN")
        .ok()
        .filter(|s| !s.is_empty())
        .map(Arc::new);
    if admin_token.is_none() {
        tracing::info!("ADMIN_TOKEN not set, catalog reset endpoint disabled");
    }

    // Create module-specific states
    let accounts_state = accounts::AppState::new(db.clone(), auth.clone());
    let events_state = events::AppState {
        service: Arc::new(EventService::new(db.clone())),
        admin_token,
    };
    let profiles_state = profiles::AppState::new(db.clone(), auth.clone());
    let health_state = HealthState {
        auth_mode: format!("{:?}", auth.mode),
    };

    let mut app = Router::new()
        .route("/", get(home))
        .route("/health", get(health).with_state(health_state))
        .merge(accounts::routes(accounts_state))
        .merge(events::routes(events_state))
        .merge(profiles::routes(profiles_state));

    // Chat routes are mounted only when the Gemini client is configured
    match GeminiClient::from_env() {
        Ok(client) => {
            tracing::info!("Assistant configured, chat routes enabled");
            let agent = ChatAgent::new(Box::new(client));
            app = app.merge(chat::routes(chat::AppState::new(agent)));
        }
        Err(_) => {
            tracing::info!("GEMINI_API_KEY not set, chat routes disabled");
        }
    }

    // Add Swagger UI
    let app =
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    // Add tracing
    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let addr = "0.0.0.0:8000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_home_route() {
        let app = Router::new().route("/", get(home));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["message"], "Campushub event API is running");
    }

    #[tokio::test]
    async fn test_health_route() {
        let state = HealthState {
            auth_mode: "Full".to_string(),
        };
        let app = Router::new().route("/health", get(health).with_state(state));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["auth_mode"], "Full");
    }
}
