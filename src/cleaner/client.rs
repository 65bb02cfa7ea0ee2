//! Chat completion client for an OpenAI-compatible cleaning service.
//!
//! One request per chunk: fixed system prompt plus the chunk wrapped in a
//! user message. The first choice's message content is returned verbatim.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::cleaner::{ChunkCleaner, prompt};
use crate::error::{HearscribeError, Result};

/// Connection settings for the cleaning service.
///
/// Held privately by [`ChatCleaner`]; there is no process-wide client or
/// API-key singleton.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`).
    pub base_url: String,
    /// Bearer token for the service.
    pub api_key: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Request-level timeout; expiry surfaces as a cleaning failure.
    pub timeout: Duration,
}

impl CleanerConfig {
    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Extract the first choice's message content from a response body.
///
/// No post-processing: whatever text the service returned is what the caller
/// gets, including any leading or trailing whitespace.
fn extract_content(body: &str) -> Result<String> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| HearscribeError::Cleaning {
            message: format!("failed to parse service response: {e}"),
        })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| HearscribeError::Cleaning {
            message: "service response contained no message content".to_string(),
        })
}

/// Cleaner backed by a remote chat completion endpoint.
pub struct ChatCleaner {
    client: reqwest::Client,
    config: CleanerConfig,
}

impl ChatCleaner {
    /// Build a cleaner with a request-level timeout baked into the HTTP client.
    pub fn new(config: CleanerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HearscribeError::Cleaning {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ChunkCleaner for ChatCleaner {
    async fn clean(&self, chunk: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt::user_message(chunk),
                },
            ],
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| HearscribeError::Cleaning {
                message: format!("request failed: {e}"),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| HearscribeError::Cleaning {
            message: format!("failed to read service response: {e}"),
        })?;

        if !status.is_success() {
            return Err(HearscribeError::Cleaning {
                message: format!("service returned status {status}: {body}"),
            });
        }

        extract_content(&body)
    }

    fn name(&self) -> &str {
        "chat-completion"
    }
}
