// Common DTOs and the error mapping shared by all endpoints

use axum::http::StatusCode;
use axum::Json;
use campushub_core::ServiceError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for plain acknowledgement responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Client-facing error body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Map a domain error onto its HTTP response.
///
/// Domain outcomes keep their fixed messages; internal faults are logged and
/// surface only the generic body, never store details.
pub fn error_response(err: ServiceError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        ServiceError::Conflict => StatusCode::BAD_REQUEST,
        ServiceError::InvalidCredentials => StatusCode::BAD_REQUEST,
        ServiceError::UserNotFound | ServiceError::EventNotFound => StatusCode::NOT_FOUND,
        ServiceError::MalformedInput(_) => StatusCode::BAD_REQUEST,
        ServiceError::Internal(cause) => {
            tracing::error!("Internal error: {:#}", cause);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Internal server error")),
            );
        }
    };

    (status, Json(ErrorResponse::new(err.to_string())))
}

/// The generic 500 pair for faults arising outside the service layer.
pub fn internal_error() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
}
