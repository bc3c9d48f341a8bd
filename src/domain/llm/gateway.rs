use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use super::{LlmReply, Message};
use crate::domain::prompt::PromptBuilder;

/// Access to the two remote text-generation endpoints.
///
/// Implementations never return errors: remote failures come back as
/// [`LlmReply::RemoteError`], and a failed secondary call is answered by
/// the primary endpoint instead.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Single user-turn prompt to the primary endpoint with its default model
    async fn call_primary(&self, prompt: &str) -> LlmReply;

    /// Single user-turn prompt to the primary endpoint with an explicit model
    async fn call_primary_with_model(&self, prompt: &str, model: &str) -> LlmReply;

    /// Full message sequence to the secondary endpoint, falling back to the
    /// primary endpoint with the last message's content on failure
    async fn call_secondary(&self, messages: Vec<Message>) -> LlmReply;
}

/// Ask the secondary endpoint whether a question is about programming.
///
/// Fails closed: anything other than a successful reply containing "yes"
/// is treated as "no".
pub async fn is_coding_question(gateway: &dyn LlmGateway, question: &str) -> bool {
    let messages = PromptBuilder::default().coding_question_messages(question);

    match gateway.call_secondary(messages).await {
        LlmReply::Text { content } => content.to_lowercase().contains("yes"),
        LlmReply::RemoteError { message } => {
            debug!(error = %message, "Question classification failed, assuming not code");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_yes_reply_is_coding_question() {
        let mut gateway = MockLlmGateway::new();
        gateway
            .expect_call_secondary()
            .withf(|messages: &Vec<Message>| {
                messages.len() == 2
                    && messages[1].content().ends_with("Question: What does this regex do?")
            })
            .times(1)
            .returning(|_| LlmReply::text("Yes, this is about code."));

        assert!(is_coding_question(&gateway, "What does this regex do?").await);
    }

    #[tokio::test]
    async fn test_no_reply_is_not_coding_question() {
        let mut gateway = MockLlmGateway::new();
        gateway
            .expect_call_secondary()
            .returning(|_| LlmReply::text("No."));

        assert!(!is_coding_question(&gateway, "What is the capital of France?").await);
    }

    #[tokio::test]
    async fn test_remote_error_fails_closed() {
        let mut gateway = MockLlmGateway::new();
        gateway
            .expect_call_secondary()
            .returning(|_| LlmReply::remote_error("connection refused, yes really"));

        assert!(!is_coding_question(&gateway, "What does this regex do?").await);
    }
}
