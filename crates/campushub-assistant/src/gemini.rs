// Gemini generateContent client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{AssistantError, TextModel};

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Client for the Gemini generateContent endpoint.
///
/// # Example
///
/// ```ignore
/// use campushub_assistant::GeminiClient;
///
/// let client = GeminiClient::from_env()?;
/// // or
/// let client = GeminiClient::new("your-api-key");
/// // or with a custom endpoint
/// let client = GeminiClient::with_base_url("your-api-key", "http://localhost:8089");
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a client from the GEMINI_API_KEY environment variable.
    /// GEMINI_BASE_URL overrides the endpoint when set.
    pub fn from_env() -> Result<Self, AssistantError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            AssistantError::Configuration("GEMINI_API_KEY environment variable not set".to_string())
        })?;

        let mut client = Self::new(api_key);
        if let Ok(url) = std::env::var("GEMINI_BASE_URL") {
            client.api_url = url;
        }

        Ok(client)
    }

    /// Create a client with a custom API URL (tests, proxies)
    pub fn with_base_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        let mut client = Self::new(api_key);
        client.api_url = api_url.into();
        client
    }

    /// Override the model id
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send a prompt and return the first non-empty candidate text.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, AssistantError> {
        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);
        tracing::debug!(model = %self.model, "Requesting completion");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Api { status, body });
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Request(e.to_string()))?;

        completion
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .map(|p| p.text)
            .find(|t| !t.is_empty())
            .ok_or(AssistantError::EmptyCompletion)
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        self.generate_content(prompt).await
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Gemini API types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
