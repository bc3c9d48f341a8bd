use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error was raised before any remote call was attempted
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Please paste or upload your code.");
        assert_eq!(
            error.to_string(),
            "Validation error: Please paste or upload your code."
        );
        assert!(error.is_validation());
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("primary", "HTTP 500");
        assert_eq!(error.to_string(), "Provider error: primary - HTTP 500");
        assert!(!error.is_validation());
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("invalid port");
        assert_eq!(error.to_string(), "Configuration error: invalid port");
    }
}
