// Error types for the assistant

use thiserror::Error;

/// Errors that can occur while talking to the hosted model
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Transport-level failure reaching the model API
    #[error("request failed: {0}")]
    Request(String),

    /// Non-success response from the model API
    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Response parsed but carried no usable text
    #[error("empty completion from model")]
    EmptyCompletion,

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}
