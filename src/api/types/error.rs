//! Errors returned to HTTP callers
//!
//! Body shape: `{"error": {"message", "type", "param"?, "code"}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

/// Failure category as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Body missing, unparseable, or naming an unsupported option
    MalformedBody(StatusCode),
    /// Code or question rejected before any remote call
    Validation,
    /// No remote endpoint could be used
    Upstream,
    Internal,
}

impl ApiErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody(status) => *status,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Upstream => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            Self::MalformedBody(_) | Self::Validation => "invalid_request_error",
            Self::Upstream => "service_unavailable_error",
            Self::Internal => "server_error",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedBody(_) => "json_parse_error",
            Self::Validation => "validation_error",
            Self::Upstream => "upstream_error",
            Self::Internal => "internal_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    pub code: String,
}

#[derive(Debug, thiserror::Error)]
#[error("{}: {}", .kind.code(), .message)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    param: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            param: None,
        }
    }

    /// Name the request field at fault
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_response_body(&self) -> ApiErrorResponse {
        ApiErrorResponse {
            error: ApiErrorDetail {
                message: self.message.clone(),
                error_type: self.kind.error_type().to_string(),
                param: self.param.clone(),
                code: self.kind.code().to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.kind == ApiErrorKind::Internal {
            error!(message = %self.message, "Request failed with internal error");
        }

        (self.status(), Json(self.to_response_body())).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message } => Self::new(ApiErrorKind::Validation, message),
            DomainError::Provider { provider, message } => {
                Self::new(ApiErrorKind::Upstream, format!("{}: {}", provider, message))
            }
            DomainError::Configuration { message } => Self::new(ApiErrorKind::Internal, message),
        }
    }
}
