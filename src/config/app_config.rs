use std::fmt;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_PRIMARY_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_PRIMARY_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_SECONDARY_URL: &str = "https://api.blackbox.ai/v1/chat/completions";
pub const DEFAULT_SECONDARY_MODEL: &str = "code-chat";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Remote endpoints and request limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Upper bound on every outbound request
    pub timeout_secs: u64,
    pub primary: EndpointConfig,
    pub secondary: EndpointConfig,
}

/// One chat-completion endpoint
#[derive(Clone, Deserialize)]
pub struct EndpointConfig {
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
}

/// Treatment of submitted code inside prompts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptConfig {
    /// Wrap code in Markdown fences instead of interpolating it bare
    #[serde(default)]
    pub fence_code: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            primary: EndpointConfig::new(DEFAULT_PRIMARY_URL, DEFAULT_PRIMARY_MODEL),
            secondary: EndpointConfig::new(DEFAULT_SECONDARY_URL, DEFAULT_SECONDARY_MODEL),
        }
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl EndpointConfig {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: String::new(),
            model: model.into(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("url", &self.url)
            .field("api_key", &if self.has_api_key() { "<redacted>" } else { "<unset>" })
            .field("model", &self.model)
            .finish()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Endpoint defaults live here so a lone `APP__LLM__PRIMARY__API_KEY`
        // still yields a complete endpoint
        let config = config::Config::builder()
            .set_default("llm.primary.url", DEFAULT_PRIMARY_URL)?
            .set_default("llm.primary.model", DEFAULT_PRIMARY_MODEL)?
            .set_default("llm.secondary.url", DEFAULT_SECONDARY_URL)?
            .set_default("llm.secondary.model", DEFAULT_SECONDARY_MODEL)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.llm.timeout(), Duration::from_secs(60));
        assert_eq!(config.llm.primary.url, DEFAULT_PRIMARY_URL);
        assert_eq!(config.llm.primary.model, DEFAULT_PRIMARY_MODEL);
        assert_eq!(config.llm.secondary.model, DEFAULT_SECONDARY_MODEL);
        assert!(!config.llm.primary.has_api_key());
        assert!(!config.prompt.fence_code);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let endpoint = EndpointConfig::new("http://localhost", "m").with_api_key("sk-live-123");
        let debug = format!("{:?}", endpoint);
        assert!(!debug.contains("sk-live-123"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "llm": {
                "timeout_secs": 5,
                "primary": { "url": "http://p", "api_key": "k", "model": "m1" },
                "secondary": { "url": "http://s", "model": "m2" }
            }
        }))
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.timeout_secs, 5);
        assert!(config.llm.primary.has_api_key());
        assert!(!config.llm.secondary.has_api_key());
    }

    #[test]
    fn test_section_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": { "port": 9000 },
            "llm": { "timeout_secs": 5 }
        }))
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.llm.primary.url, DEFAULT_PRIMARY_URL);
        assert_eq!(config.llm.secondary.url, DEFAULT_SECONDARY_URL);
    }
}
