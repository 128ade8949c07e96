// --- File: crates/hopigo_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all HopiGo errors.
///
/// This enum provides a common set of error variants that can be used across
/// all crates. Each crate can extend this by implementing
/// From<SpecificError> for HopiGoError.
#[derive(Error, Debug)]
pub enum HopiGoError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., slot already booked)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for HopiGoError {
    fn status_code(&self) -> u16 {
        match self {
            HopiGoError::HttpError(_) => 500,
            HopiGoError::ParseError(_) => 400,
            HopiGoError::ConfigError(_) => 500,
            HopiGoError::ValidationError(_) => 400,
            HopiGoError::ExternalServiceError { .. } => 502,
            HopiGoError::ConflictError(_) => 409,
            HopiGoError::NotFoundError(_) => 404,
            HopiGoError::InternalError(_) => 500,
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for HopiGoError {
    fn from(err: reqwest::Error) -> Self {
        HopiGoError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for HopiGoError {
    fn from(err: serde_json::Error) -> Self {
        HopiGoError::ParseError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> HopiGoError {
    HopiGoError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> HopiGoError {
    HopiGoError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> HopiGoError {
    HopiGoError::ConflictError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> HopiGoError {
    HopiGoError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> HopiGoError {
    HopiGoError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("bad date").status_code(), 400);
        assert_eq!(not_found("no such provider").status_code(), 404);
        assert_eq!(conflict("slot taken").status_code(), 409);
        assert_eq!(
            external_service_error("availability", "timeout").status_code(),
            502
        );
        assert_eq!(internal_error("boom").status_code(), 500);
    }

    #[test]
    fn test_display_includes_context() {
        let err = external_service_error("availability", "connection refused");
        assert_eq!(
            err.to_string(),
            "External service error: availability - connection refused"
        );
    }

    #[test]
    fn test_serde_json_error_converts_to_parse_error() {
        let parse_failure = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: HopiGoError = parse_failure.into();
        assert!(matches!(err, HopiGoError::ParseError(_)));
        assert_eq!(err.status_code(), 400);
    }
}
