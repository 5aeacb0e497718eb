//! Error types for Unify
//!
//! This module defines all error types used throughout the library.
//! UnifyError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for Unify API operations
#[derive(Error, Debug)]
pub enum UnifyError {
    /// Network-level failure (connection refused, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("API returned status {status} for {path}")]
    Status { status: u16, path: String },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },

    /// Requested resource was not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid show ID provided
    #[error("Invalid show ID: {0}")]
    InvalidId(u32),

    /// Invalid provider ID for the add-show operation
    #[error("Invalid provider ID: {0:?}")]
    InvalidProviderId(String),
}

/// Serialize UnifyError as a string for Tauri compatibility
impl Serialize for UnifyError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Unify operations
pub type Result<T> = std::result::Result<T, UnifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unify_error_display_status() {
        let error = UnifyError::Status {
            status: 500,
            path: "/api/shows".to_string(),
        };
        assert_eq!(error.to_string(), "API returned status 500 for /api/shows");
    }

    #[test]
    fn test_unify_error_display_decode() {
        let error = UnifyError::Decode {
            path: "/api/shows/3".to_string(),
            message: "missing field `name`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to decode response from /api/shows/3: missing field `name`"
        );
    }

    #[test]
    fn test_unify_error_display_not_found() {
        let error = UnifyError::NotFound("/api/shows/99".to_string());
        assert_eq!(error.to_string(), "Not found: /api/shows/99");
    }

    #[test]
    fn test_unify_error_display_invalid_id() {
        let error = UnifyError::InvalidId(0);
        assert_eq!(error.to_string(), "Invalid show ID: 0");
    }

    #[test]
    fn test_unify_error_display_invalid_provider_id() {
        let error = UnifyError::InvalidProviderId("   ".to_string());
        assert_eq!(error.to_string(), "Invalid provider ID: \"   \"");
    }

    #[test]
    fn test_unify_error_serialize() {
        let error = UnifyError::NotFound("/api/shows/12".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Not found: /api/shows/12\"");
    }

    #[test]
    fn test_unify_error_serialize_status() {
        let error = UnifyError::Status {
            status: 502,
            path: "/api/search?q=a".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"API returned status 502 for /api/search?q=a\"");
    }
}
