//! Remote chat-completion endpoints and the gateway over them

mod chat_completions;
mod gateway;
mod http_client;

pub use chat_completions::{ChatCompletionsEndpoint, EndpointError};
pub use gateway::ChatGateway;
pub use http_client::{HttpClient, HttpClientTrait, HttpResponse};
