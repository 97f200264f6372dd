use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::message::ChatMessage;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Any failure of a completion call. Non-fatal: the turn is lost, the
/// history is kept.
#[derive(Debug, thiserror::Error)]
pub enum RemoteServiceError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("completion service returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("completion response could not be decoded: {0}")]
    Parse(String),
    #[error("completion response contained no reply text")]
    EmptyReply,
}

/// Sends the whole conversation and returns the assistant's reply.
pub trait CompletionClient {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, RemoteServiceError>;
}

/* =========================
   Wire types
   ========================= */

#[derive(Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    pub content: Option<String>,
}

/// Pull the first choice's text out of a raw response body.
pub fn parse_reply(body: &str) -> Result<String, RemoteServiceError> {
    let resp: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| RemoteServiceError::Parse(e.to_string()))?;

    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(RemoteServiceError::EmptyReply)
}

/* =========================
   OpenAI-compatible client
   ========================= */

pub struct OpenAiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_base: impl Into<String>, model: impl Into<String>, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    /// Ask the service which models it serves.
    pub fn test_connection(&self) -> anyhow::Result<String> {
        let resp = self
            .client
            .get(self.endpoint("models"))
            .bearer_auth(&self.api_key)
            .send()?
            .error_for_status()?;

        let body: serde_json::Value = resp.json()?;

        Ok(format!(
            "Connected ({} models available)",
            body["data"].as_array().map(|a| a.len()).unwrap_or(0)
        ))
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, RemoteServiceError> {
        let req = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        debug!(model = %self.model, messages = messages.len(), "sending completion request");

        let resp = self
            .client
            .post(self.endpoint("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "completion service rejected request");
            return Err(RemoteServiceError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        parse_reply(&body)
    }
}
