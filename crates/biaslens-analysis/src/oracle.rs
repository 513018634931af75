//! Client for the external text-analysis oracle.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Failure taxonomy for oracle calls.
///
/// The oracle is an unreliable external dependency: every variant maps to a
/// fixed sentinel string via [`OracleError::sentinel`], so the pipeline can
/// embed a degraded value instead of failing the whole request.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to reach the analysis service: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("analysis service rate limit exceeded")]
    RateLimited,

    #[error("analysis service returned an empty or malformed response")]
    EmptyResponse,

    #[error("analysis service error (status {status}): {body}")]
    Api { status: u16, body: String },
}

impl OracleError {
    /// The fixed error string this failure degrades to inside a result.
    #[must_use]
    pub fn sentinel(&self) -> &'static str {
        match self {
            OracleError::Connect(_) => "Error: Failed to connect to the analysis service.",
            OracleError::RateLimited => {
                "Error: Analysis service rate limit exceeded. Try again later."
            }
            OracleError::EmptyResponse => "Error: Empty response from the analysis service.",
            OracleError::Api { .. } => {
                "Error: Unexpected issue occurred while processing request."
            }
        }
    }
}

/// A text-understanding service invoked with a fixed instruction.
///
/// The trait seam lets the pipeline be exercised with a scripted oracle in
/// tests; production uses [`OpenAiOracle`].
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Sends a system-instructions + user-text exchange and returns the
    /// trimmed content of the first response choice.
    async fn analyze(
        &self,
        text: &str,
        instructions: &str,
        temperature: f32,
    ) -> Result<String, OracleError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Oracle backed by an OpenAI-compatible `chat/completions` endpoint.
pub struct OpenAiOracle {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiOracle {
    #[must_use]
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    /// Overrides the API base URL. Used to point at a mock server in tests or
    /// at an OpenAI-compatible proxy.
    #[must_use]
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl Oracle for OpenAiOracle {
    async fn analyze(
        &self,
        text: &str,
        instructions: &str,
        temperature: f32,
    ) -> Result<String, OracleError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instructions,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature,
        };

        tracing::debug!(model = %self.model, "oracle chat request");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(OracleError::Connect)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OracleError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|_| OracleError::EmptyResponse)?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(OracleError::EmptyResponse)
    }
}

#[cfg(test)]
#[path = "oracle_test.rs"]
mod tests;
