//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for backend requests
//! - [`StorageError`] - localStorage operations for the session token
//! - [`SaveError`] - handing downloaded content to the user

use thiserror::Error;

use crate::config::messages;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx response, carrying the message extracted from the body
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

impl FetchError {
    /// Build an HTTP error from a non-success response body.
    ///
    /// The backend answers failures either with plain text or with a JSON
    /// object carrying a `message` field. The JSON message wins, then the raw
    /// text, then a generic fallback.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .filter(|m| !m.is_empty())
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .unwrap_or_else(|| messages::REQUEST_FAILED.to_string());

        Self::Http { status, message }
    }

    /// Whether the request never produced a response.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::NoWindow | Self::RequestCreationFailed | Self::NetworkError(_)
        )
    }

    /// HTTP status of the failed response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Session storage errors for localStorage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to save to localStorage.
    #[error("failed to save to localStorage")]
    SaveFailed,
    /// Failed to remove from localStorage.
    #[error("failed to remove from localStorage")]
    RemoveFailed,
}

/// Errors offering downloaded bytes to the user as a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// No document to attach the download link to.
    #[error("document not available")]
    NoDocument,
    /// Blob, object URL or anchor creation was rejected.
    #[error("browser rejected the download: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_json_body() {
        let err = FetchError::from_response(409, r#"{"message":"Email already taken"}"#);
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "Email already taken");
    }

    #[test]
    fn test_message_from_plain_text() {
        let err = FetchError::from_response(401, "Invalid email or password\n");
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_message_fallback() {
        assert_eq!(FetchError::from_response(500, "").to_string(), "Request failed");
        assert_eq!(FetchError::from_response(500, "  ").to_string(), "Request failed");
    }

    #[test]
    fn test_json_without_message_uses_text() {
        let err = FetchError::from_response(400, r#"{"error":"bad"}"#);
        assert_eq!(err.to_string(), r#"{"error":"bad"}"#);
    }

    #[test]
    fn test_categories() {
        assert!(FetchError::NoWindow.is_network());
        assert!(FetchError::NetworkError("refused".into()).is_network());
        assert!(!FetchError::JsonParseError("eof".into()).is_network());
        assert!(!FetchError::from_response(404, "missing").is_network());
        assert_eq!(FetchError::NoWindow.status(), None);
    }
}
