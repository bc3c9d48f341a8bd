//! Application state for shared services

use std::sync::Arc;

use crate::config::LlmConfig;
use crate::infrastructure::services::WorkflowService;

/// Shared across all handlers; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub workflow_service: Arc<WorkflowService>,
    pub credentials: CredentialStatus,
}

impl AppState {
    pub fn new(workflow_service: Arc<WorkflowService>, credentials: CredentialStatus) -> Self {
        Self {
            workflow_service,
            credentials,
        }
    }
}

/// Which endpoint credentials were supplied at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialStatus {
    pub primary: bool,
    pub secondary: bool,
}

impl CredentialStatus {
    pub fn from_config(config: &LlmConfig) -> Self {
        Self {
            primary: config.primary.has_api_key(),
            secondary: config.secondary.has_api_key(),
        }
    }
}
