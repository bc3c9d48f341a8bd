//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_PRIMARY_MODEL, DEFAULT_PRIMARY_URL, DEFAULT_SECONDARY_MODEL,
    DEFAULT_SECONDARY_URL, EndpointConfig, LlmConfig, LogFormat, LoggingConfig, PromptConfig,
    ServerConfig,
};
