//! LLM domain models and the gateway trait

mod gateway;
mod message;
mod reply;

pub use gateway::{LlmGateway, is_coding_question};
pub use message::{Message, MessageRole};
pub use reply::{LlmReply, REMOTE_ERROR_PREFIX};

#[cfg(test)]
pub use gateway::MockLlmGateway;
