//! OpenAI-compatible chat completions client.
//!
//! Works against any endpoint exposing `POST {base_url}/chat/completions`.

use std::time::Duration;

use async_trait::async_trait;
use nextplay_core::config::LlmConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::llm::{CompletionService, ServiceError};

#[derive(Clone, Debug)]
pub struct OpenAiCompletionClient {
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiCompletionClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|error| ServiceError::Transport(error.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn bearer_token(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret().trim()).filter(|key| !key.is_empty())
    }
}

#[async_trait]
impl CompletionService for OpenAiCompletionClient {
    async fn complete(&self, system_role: &str, user_text: &str) -> Result<String, ServiceError> {
        let token = self.bearer_token().ok_or(ServiceError::MissingCredential)?;

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: system_role },
                ChatMessage { role: "user", content: user_text },
            ],
        };

        debug!(
            event_name = "agent.completion.request",
            model = %self.model,
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|error| {
                warn!(
                    event_name = "agent.completion.transport_error",
                    error = %error,
                    "chat completion request failed"
                );
                ServiceError::Transport(error.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                event_name = "agent.completion.status_error",
                status = status.as_u16(),
                "chat completion endpoint rejected the request"
            );
            return Err(ServiceError::Status { status: status.as_u16(), body });
        }

        let raw =
            response.text().await.map_err(|error| ServiceError::Transport(error.to_string()))?;
        parse_completion(&raw)
    }

    fn has_credential(&self) -> bool {
        self.bearer_token().is_some()
    }
}

/// Pulls the first choice's content out of a chat completion body.
///
/// A choice with `null` content yields an empty string.
fn parse_completion(raw: &str) -> Result<String, ServiceError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(raw)
        .map_err(|error| ServiceError::MalformedResponse(error.to_string()))?;

    let choice = parsed.choices.into_iter().next().ok_or_else(|| {
        ServiceError::MalformedResponse("response contained no choices".to_string())
    })?;

    Ok(choice.message.content.unwrap_or_default().trim().to_string())
}
