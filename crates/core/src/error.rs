//! Unified error types for Vellum.
//!
//! This module provides the canonical error type for all Vellum operations.
//! Every failure is surfaced to the caller with a distinguishable kind; no
//! operation retries internally.

use thiserror::Error;

/// All Vellum errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Document name collides with version-key syntax or cannot be embedded
    /// in a key (empty, or contains the segment delimiter)
    #[error("invalid name '{name}': {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Reason the name is invalid
        reason: String,
    },

    /// Structurally invalid key string where a version key was expected
    #[error("malformed key: {0}")]
    MalformedKey(String),

    /// Key or document name absent
    #[error("not found: {0}")]
    NotFound(String),

    /// Key already holds a value (the store is append-only)
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// I/O error from the backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific storage error, passed through unchanged
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for Vellum operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an invalid-name error.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Error::InvalidName { .. })
    }

    /// Check if this is a malformed-key error.
    pub fn is_malformed_key(&self) -> bool {
        matches!(self, Error::MalformedKey(_))
    }

    /// Check if this is a duplicate-key error.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Error::DuplicateKey(_))
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}
