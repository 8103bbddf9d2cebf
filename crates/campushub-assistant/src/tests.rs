// Assistant tests: agent history behavior plus the Gemini client against a
// mock server.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{AssistantError, ChatAgent, GeminiClient, Role, TextModel, DEFAULT_SYSTEM_PROMPT};

/// Scripted model: pops canned replies and records every prompt it saw.
/// The prompt log is shared so tests can inspect it after handing the model
/// to the agent.
struct ScriptedModel {
    replies: Mutex<Vec<String>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedModel {
    fn new(replies: &[&str]) -> (Self, Arc<Mutex<Vec<String>>>) {
        let mut replies: Vec<String> = replies.iter().map(|r| r.to_string()).collect();
        replies.reverse();
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let model = Self {
            replies: Mutex::new(replies),
            prompts: prompts.clone(),
        };
        (model, prompts)
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop()
            .ok_or(AssistantError::EmptyCompletion)
    }
}

#[tokio::test]
async fn test_chat_remembers_both_sides_of_the_exchange() {
    let (model, _) = ScriptedModel::new(&["Try the Hackathon!"]);
    let mut agent = ChatAgent::new(Box::new(model));

    let reply = agent.chat("What should I join?").await.unwrap();
    assert_eq!(reply, "Try the Hackathon!");

    let history = agent.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[0].text, "What should I join?");
    assert_eq!(history[1].role, Role::Assistant);
    assert_eq!(history[1].text, "Try the Hackathon!");
}

#[tokio::test]
async fn test_prompt_carries_system_prompt_and_full_history() {
    let (model, prompts) = ScriptedModel::new(&["reply one", "reply two"]);
    let mut agent = ChatAgent::new(Box::new(model));

    agent.chat("first question").await.unwrap();
    agent.chat("second question").await.unwrap();

    // The second prompt must replay the whole conversation in order
    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 2);
    let second = &prompts[1];
    assert!(second.starts_with(DEFAULT_SYSTEM_PROMPT));
    let user_one = second.find("User: first question").unwrap();
    let assistant_one = second.find("Assistant: reply one").unwrap();
    let user_two = second.find("User: second question").unwrap();
    assert!(user_one < assistant_one && assistant_one < user_two);
    assert!(second.ends_with("Assistant:"));
}

#[tokio::test]
async fn test_reset_clears_history() {
    let (model, _) = ScriptedModel::new(&["a", "b"]);
    let mut agent = ChatAgent::new(Box::new(model));

    agent.chat("hello").await.unwrap();
    assert_eq!(agent.history().len(), 2);

    agent.reset();
    assert!(agent.history().is_empty());
}

#[tokio::test]
async fn test_failed_turn_is_not_remembered() {
    // No scripted replies: the model errors on the first call
    let (model, _) = ScriptedModel::new(&[]);
    let mut agent = ChatAgent::new(Box::new(model));

    let result = agent.chat("hello").await;
    assert!(result.is_err());
    assert!(agent.history().is_empty());
}

#[tokio::test]
async fn test_gemini_client_returns_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "Hello from campus!"}]}}
            ]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri());
    let text = client.generate_content("hi").await.unwrap();
    assert_eq!(text, "Hello from campus!");
}

#[tokio::test]
async fn test_gemini_client_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri());
    let err = client.generate_content("hi").await.unwrap_err();
    match err {
        AssistantError::Api { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "quota exceeded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_gemini_client_rejects_empty_completions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri());
    let err = client.generate_content("hi").await.unwrap_err();
    assert!(matches!(err, AssistantError::EmptyCompletion));
}
