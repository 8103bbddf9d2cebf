// Chat HTTP routes wrapping the assistant agent
//
// The agent and its history are process-wide, matching the original
// single-instance design: every caller shares one conversation.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;

use campushub_assistant::ChatAgent;

use crate::common::{ErrorResponse, MessageResponse};

/// App state for chat routes
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<Mutex<ChatAgent>>,
}

impl AppState {
    pub fn new(agent: ChatAgent) -> Self {
        Self {
            agent: Arc::new(Mutex::new(agent)),
        }
    }
}

/// Create chat routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/chat/reset", post(reset_chat))
        .with_state(state)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /chat - Send one message to the campus assistant
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 502, description = "Model API unavailable", body = ErrorResponse)
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut agent = state.agent.lock().await;

    let reply = agent.chat(&req.message).await.map_err(|e| {
        tracing::error!("Chat completion failed: {}", e);
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::new("Assistant unavailable")),
        )
    })?;

    Ok(Json(ChatResponse { reply }))
}

/// POST /chat/reset - Clear the shared conversation history
#[utoipa::path(
    post,
    path = "/chat/reset",
    responses(
        (status = 200, description = "History cleared", body = MessageResponse)
    ),
    tag = "chat"
)]
pub async fn reset_chat(State(state): State<AppState>) -> Json<MessageResponse> {
    state.agent.lock().await.reset();

    Json(MessageResponse::new("Chat history cleared"))
}
