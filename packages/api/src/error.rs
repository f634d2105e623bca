//! Error type shared by every [`crate::Backend`] implementation.

use thiserror::Error;

/// Failure of a dashboard operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP 401. The stored token is no longer valid.
    #[error("{0}")]
    Unauthorized(String),

    /// The backend answered but refused the operation.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The record does not exist (demo backend or HTTP 404 without a message).
    #[error("{0} not found")]
    NotFound(String),

    /// A response body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Client-side validation failed before any request was sent.
    #[error("{}", .0.join(", "))]
    Invalid(Vec<String>),
}

impl ApiError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Text suitable for a toast: the backend's own message when it sent one,
    /// otherwise this error's description, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        let text = match self {
            Self::Rejected { message, .. } | Self::Unauthorized(message) => message.clone(),
            other => other.to_string(),
        };
        if text.trim().is_empty() {
            fallback.to_string()
        } else {
            text
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_backend_text() {
        let err = ApiError::rejected(409, "Department code already exists");
        assert_eq!(
            err.user_message("Failed to create department"),
            "Department code already exists"
        );
    }

    #[test]
    fn user_message_falls_back_when_backend_is_silent() {
        let err = ApiError::rejected(500, "");
        assert_eq!(err.user_message("Server error"), "Server error");
        let err = ApiError::Unauthorized(String::new());
        assert_eq!(err.user_message("Please sign in"), "Please sign in");
    }

    #[test]
    fn validation_errors_join_with_commas() {
        let err = ApiError::Invalid(vec![
            "Product name is required".to_string(),
            "Main image is required".to_string(),
        ]);
        assert_eq!(
            err.user_message("x"),
            "Product name is required, Main image is required"
        );
    }

    #[test]
    fn only_401_counts_as_unauthorized() {
        assert!(ApiError::Unauthorized("expired".into()).is_unauthorized());
        assert!(!ApiError::rejected(403, "forbidden").is_unauthorized());
    }
}
