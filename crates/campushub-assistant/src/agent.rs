// Conversational agent with in-memory history

use crate::{AssistantError, TextModel};

/// System prompt for the campus assistant.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a smart and friendly AI assistant for a student event management website.\n\nYou can:\n- Explain events\n- Suggest events\n- Answer questions about categories\n- Help students decide what to join\n\nKeep responses friendly, short but helpful, clear, and engaging.\nAlways speak like a helpful campus assistant.";

/// Speaker of one conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// One remembered exchange in the conversation.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

/// Chat agent that rebuilds the full prompt from its history on every turn.
///
/// History grows by two turns per successful exchange and is only emptied by
/// `reset`. There is no trimming: the original design keeps the entire
/// conversation in the prompt.
pub struct ChatAgent {
    model: Box<dyn TextModel>,
    system_prompt: String,
    history: Vec<ChatTurn>,
}

impl ChatAgent {
    pub fn new(model: Box<dyn TextModel>) -> Self {
        Self::with_system_prompt(model, DEFAULT_SYSTEM_PROMPT)
    }

    pub fn with_system_prompt(model: Box<dyn TextModel>, system_prompt: impl Into<String>) -> Self {
        Self {
            model,
            system_prompt: system_prompt.into(),
            history: Vec::new(),
        }
    }

    /// Send one user message and return the assistant's reply.
    /// Both sides of the exchange are remembered for later turns.
    pub async fn chat(&mut self, user_message: &str) -> Result<String, AssistantError> {
        self.history.push(ChatTurn {
            role: Role::User,
            text: user_message.to_string(),
        });

        let prompt = self.build_prompt();

        let reply = match self.model.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                // Drop the unanswered turn so a retry does not duplicate it
                self.history.pop();
                return Err(e);
            }
        };

        self.history.push(ChatTurn {
            role: Role::Assistant,
            text: reply.clone(),
        });

        Ok(reply)
    }

    /// Forget the conversation so far. The system prompt is unaffected.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    fn build_prompt(&self) -> String {
        let conversation = self
            .history
            .iter()
            .map(|turn| format!("{}: {}", turn.role.label(), turn.text))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\nConversation so far:\n{}\n\nAssistant:",
            self.system_prompt, conversation
        )
    }
}
