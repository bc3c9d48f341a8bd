//! Code Genie
//!
//! LLM-backed workflows over submitted source code:
//! - Explanation tuned to skill level, role and response language
//! - Refactoring with a unified diff against the original
//! - Review, error detection and test generation
//! - Question answering and comment generation
//!
//! Exposed through an HTTP API and one-shot CLI commands.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, CredentialStatus};
use domain::{FenceFilter, PromptBuilder};
use infrastructure::llm::ChatGateway;
use infrastructure::services::WorkflowService;
use tracing::{info, warn};

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let credentials = CredentialStatus::from_config(&config.llm);
    warn_missing_credentials(credentials);

    let gateway = ChatGateway::from_config(&config.llm)?;
    info!(
        primary_model = %config.llm.primary.model,
        secondary_model = %config.llm.secondary.model,
        timeout_secs = config.llm.timeout_secs,
        "LLM gateway configured"
    );

    let prompts = if config.prompt.fence_code {
        PromptBuilder::with_filter(Arc::new(FenceFilter))
    } else {
        PromptBuilder::new()
    };

    let service = WorkflowService::new(Arc::new(gateway)).with_prompt_builder(prompts);

    Ok(AppState::new(Arc::new(service), credentials))
}

fn warn_missing_credentials(credentials: CredentialStatus) {
    if !credentials.primary {
        warn!("No API key configured for the primary endpoint; set APP__LLM__PRIMARY__API_KEY");
    }
    if !credentials.secondary {
        warn!(
            "No API key configured for the secondary endpoint; set APP__LLM__SECONDARY__API_KEY"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndpointConfig;

    #[test]
    fn test_create_app_state_without_keys() {
        let state = create_app_state(&AppConfig::default()).unwrap();
        assert_eq!(state.credentials, CredentialStatus::default());
    }

    #[test]
    fn test_create_app_state_reports_configured_keys() {
        let mut config = AppConfig::default();
        config.llm.primary =
            EndpointConfig::new("http://localhost:1/v1", "m").with_api_key("secret");
        config.prompt.fence_code = true;

        let state = create_app_state(&config).unwrap();
        assert!(state.credentials.primary);
        assert!(!state.credentials.secondary);
    }
}
