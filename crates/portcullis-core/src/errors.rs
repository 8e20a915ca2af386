//! Unified error type for Portcullis operations.
//!
//! A single flat enum with constructor helpers keeps the error surface small:
//! per-hook failures are converted into decision payloads at the dispatcher
//! boundary, so only collaborator faults and protocol rejections travel as
//! `Err` values.

use serde::{Deserialize, Serialize};

/// Unified error type for all Portcullis operations.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum PortcullisError {
    /// Invalid input, payload, or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// What was invalid
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// What was not found
        message: String,
    },

    /// Permission denied
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// The permission issue
        message: String,
    },

    /// Credential handling failed
    #[error("Credential error: {message}")]
    Credential {
        /// The credential failure
        message: String,
    },

    /// Directory or storage operation failed
    #[error("Storage error: {message}")]
    Storage {
        /// The storage failure
        message: String,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// The internal failure
        message: String,
    },
}

impl PortcullisError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a credential error
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Standard Result type for Portcullis operations
pub type Result<T> = std::result::Result<T, PortcullisError>;
