// Campus event assistant
//
// A chatbot wrapper around the Gemini generateContent API. The agent keeps
// the conversation in memory and rebuilds the full prompt on every turn;
// the hosted model sits behind the TextModel trait so the agent can be
// exercised without network access.

mod agent;
mod error;
mod gemini;

#[cfg(test)]
mod tests;

pub use agent::{ChatAgent, ChatTurn, Role, DEFAULT_SYSTEM_PROMPT};
pub use error::AssistantError;
pub use gemini::GeminiClient;

use async_trait::async_trait;

/// Text-generation seam between the agent and the hosted model.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Produce a completion for the fully built prompt.
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError>;
}
