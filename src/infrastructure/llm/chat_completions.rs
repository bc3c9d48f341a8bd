use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::http_client::HttpClientTrait;
use crate::config::EndpointConfig;
use crate::domain::{DomainError, Message, MessageRole};

/// Why a chat-completion call produced no text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Malformed(String),
}

impl EndpointError {
    /// Text shown to users in place of the generated content
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Status { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

/// Client for one OpenAI-style `/chat/completions` endpoint
pub struct ChatCompletionsEndpoint<C: HttpClientTrait> {
    name: &'static str,
    client: C,
    url: String,
    auth_header: String,
    has_api_key: bool,
    default_model: String,
}

impl<C: HttpClientTrait> fmt::Debug for ChatCompletionsEndpoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionsEndpoint")
            .field("name", &self.name)
            .field("client", &self.client)
            .field("url", &self.url)
            .field(
                "authorization",
                &if self.has_api_key { "<redacted>" } else { "<unset>" },
            )
            .field("default_model", &self.default_model)
            .finish()
    }
}

impl<C: HttpClientTrait> ChatCompletionsEndpoint<C> {
    pub fn new(name: &'static str, client: C, config: &EndpointConfig) -> Self {
        Self {
            name,
            client,
            url: config.url.clone(),
            auth_header: format!("Bearer {}", config.api_key),
            has_api_key: config.has_api_key(),
            default_model: config.model.clone(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    fn build_request(&self, model: &str, messages: &[Message]) -> serde_json::Value {
        let messages: Vec<ChatMessage> = messages.iter().map(ChatMessage::from_domain).collect();

        serde_json::json!({
            "model": model,
            "messages": messages,
        })
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    /// Send `messages` and return `choices[0].message.content`
    pub async fn complete(
        &self,
        model: &str,
        messages: &[Message],
    ) -> Result<String, EndpointError> {
        let body = self.build_request(model, messages);
        let response = self
            .client
            .post_json(&self.url, self.headers(), &body)
            .await
            .map_err(transport_error)?;

        if !response.is_ok() {
            return Err(EndpointError::Status {
                status: response.status,
                body: response.body,
            });
        }

        parse_content(&response.body)
    }
}

/// Keep only the client's own message; the provider label is noise to users
fn transport_error(err: DomainError) -> EndpointError {
    match err {
        DomainError::Provider { message, .. } => EndpointError::Transport(message),
        other => EndpointError::Transport(other.to_string()),
    }
}

fn parse_content(body: &str) -> Result<String, EndpointError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| EndpointError::Malformed(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| EndpointError::Malformed("No choices in response".to_string()))
}

// Wire types

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> ChatMessage<'a> {
    fn from_domain(message: &'a Message) -> Self {
        let role = match message.role {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };

        Self {
            role,
            content: message.content(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
