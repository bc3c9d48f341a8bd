use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix shown in front of a failed primary call's response body
pub const REMOTE_ERROR_PREFIX: &str = "[Primary API Error]";

/// Outcome of a gateway call.
///
/// Remote failures are values, not errors: a failed call still renders to
/// displayable text, so a workflow can always complete. Callers that care
/// can tell the two cases apart with [`LlmReply::is_success`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LlmReply {
    /// Generated text from `choices[0].message.content`
    Text { content: String },
    /// Non-200 status, transport failure or malformed body
    RemoteError { message: String },
}

impl LlmReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn remote_error(message: impl Into<String>) -> Self {
        Self::RemoteError {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Generated text, if the call succeeded
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Text { content } => Some(content),
            Self::RemoteError { .. } => None,
        }
    }

    /// Text shown to the user for either outcome
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LlmReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { content } => f.write_str(content),
            Self::RemoteError { message } => write!(f, "{} {}", REMOTE_ERROR_PREFIX, message),
        }
    }
}
