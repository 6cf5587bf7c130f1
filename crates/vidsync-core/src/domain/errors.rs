//! Domain error types
//!
//! This module defines error types specific to domain operations:
//! malformed identifiers and incomplete field sets. These are raised
//! before any request leaves the client.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid video identifier
    #[error("Invalid video ID: {0}")]
    InvalidVideoId(String),

    /// Invalid comment identifier
    #[error("Invalid comment ID: {0}")]
    InvalidCommentId(String),

    /// Invalid user identifier (blank login name, blank author)
    #[error("Invalid user ID: {0}")]
    InvalidUserId(String),

    /// A required field was missing or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Generic validation failure
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
