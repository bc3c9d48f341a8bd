use async_trait::async_trait;
use tracing::{debug, warn};

use super::chat_completions::ChatCompletionsEndpoint;
use super::http_client::{HttpClient, HttpClientTrait};
use crate::config::LlmConfig;
use crate::domain::{DomainError, LlmGateway, LlmReply, Message};

/// Gateway over the primary and secondary chat-completion endpoints
#[derive(Debug)]
pub struct ChatGateway<C: HttpClientTrait> {
    primary: ChatCompletionsEndpoint<C>,
    secondary: ChatCompletionsEndpoint<C>,
}

impl ChatGateway<HttpClient> {
    /// Build a gateway backed by reqwest, bounded by the configured timeout
    pub fn from_config(config: &LlmConfig) -> Result<Self, DomainError> {
        let client = HttpClient::with_timeout(config.timeout())?;
        Ok(Self::new(client.clone(), client, config))
    }
}

impl<C: HttpClientTrait> ChatGateway<C> {
    pub fn new(primary_client: C, secondary_client: C, config: &LlmConfig) -> Self {
        Self {
            primary: ChatCompletionsEndpoint::new("primary", primary_client, &config.primary),
            secondary: ChatCompletionsEndpoint::new(
                "secondary",
                secondary_client,
                &config.secondary,
            ),
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmGateway for ChatGateway<C> {
    async fn call_primary(&self, prompt: &str) -> LlmReply {
        let model = self.primary.default_model().to_string();
        self.call_primary_with_model(prompt, &model).await
    }

    async fn call_primary_with_model(&self, prompt: &str, model: &str) -> LlmReply {
        debug!(
            endpoint = self.primary.name(),
            model = %model,
            prompt_chars = prompt.len(),
            "Calling primary endpoint"
        );

        match self.primary.complete(model, &[Message::user(prompt)]).await {
            Ok(content) => LlmReply::text(content),
            Err(e) => {
                warn!(endpoint = self.primary.name(), error = %e, "Primary endpoint call failed");
                LlmReply::remote_error(e.diagnostic())
            }
        }
    }

    async fn call_secondary(&self, messages: Vec<Message>) -> LlmReply {
        let model = self.secondary.default_model().to_string();
        debug!(
            endpoint = self.secondary.name(),
            model = %model,
            messages = messages.len(),
            "Calling secondary endpoint"
        );

        match self.secondary.complete(&model, &messages).await {
            Ok(content) => LlmReply::text(content),
            Err(e) => {
                warn!(
                    endpoint = self.secondary.name(),
                    error = %e,
                    "Secondary endpoint call failed, falling back to primary"
                );
                let prompt = messages.last().map(Message::content).unwrap_or_default();
                self.call_primary(prompt).await
            }
        }
    }
}
