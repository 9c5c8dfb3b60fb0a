/*
[INPUT]:  Error sources (transport, API status, validation, decoding, config)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ValidationErrors;

/// Main error type for the Listmonk adapter
#[derive(Error, Debug)]
pub enum ListmonkError {
    /// Request DTO failed its declared field rules; nothing was sent
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status on an endpoint that does not
    /// degrade to a default value
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// A required field was absent from the server payload
    #[error("Response is missing required field `{field}`")]
    MissingField { field: String },

    /// A field was present but carried an unexpected JSON type or format
    #[error("Response field `{field}` is invalid: {reason}")]
    InvalidField { field: String, reason: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ListmonkError {
    /// Create an API error from status code and body text
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        ListmonkError::Api {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        ListmonkError::MissingField {
            field: field.into(),
        }
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ListmonkError::Api { status, .. } => Some(*status),
            ListmonkError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if the error was raised before any request left the client
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ListmonkError::Validation(_))
    }

    /// Check if the error indicates a transport timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ListmonkError::Http(err) if err.is_timeout())
    }
}

/// Result type alias for Listmonk operations
pub type Result<T> = std::result::Result<T, ListmonkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ListmonkError::api_error(StatusCode::BAD_REQUEST, "invalid email");
        match err {
            ListmonkError::Api { status, ref body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid email");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_detection() {
        let err = ListmonkError::api_error(StatusCode::NOT_FOUND, "");
        assert!(err.is_not_found());
        assert!(!ListmonkError::missing_field("id").is_not_found());
    }

    #[test]
    fn test_missing_field_message() {
        let err = ListmonkError::missing_field("email");
        assert_eq!(
            err.to_string(),
            "Response is missing required field `email`"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_validation_error_predicate() {
        let mut errors = ValidationErrors::default();
        errors.add("email", "The email field is required.");
        let err = ListmonkError::from(errors);
        assert!(err.is_validation_error());
        assert!(!ListmonkError::Config("x".into()).is_validation_error());
    }
}
