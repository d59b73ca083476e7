//! Error types for Mathscope.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Errors fall into three user-facing classes: client-side validation,
//! backend-reported domain errors, and transport failures.

use std::path::PathBuf;
use thiserror::Error;

/// Message shown for every transport-level failure.
pub const CONNECT_FAILED: &str = "Failed to connect to the backend server.";

/// Fallback when the backend rejects a request without an `error` field.
pub const GENERIC_BACKEND_ERROR: &str = "An error occurred.";

/// Result type alias for Mathscope operations.
pub type Result<T> = std::result::Result<T, MathscopeError>;

/// Errors that can occur in Mathscope.
#[derive(Debug, Error)]
pub enum MathscopeError {
    /// Input rejected before any request was built.
    #[error("{0}")]
    Validation(String),

    /// Error reported by the backend, passed through verbatim.
    #[error("{0}")]
    Backend(String),

    /// Unreachable server, timeout or unreadable response body.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Failed to render or write a chart image.
    #[error("Failed to export {path}: {reason}")]
    Export {
        /// Target file.
        path: PathBuf,
        /// Renderer or filesystem message.
        reason: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl MathscopeError {
    /// Create a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an Export error.
    pub fn export(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Export {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Text to show the user for this error.
    ///
    /// Transport failures collapse to a fixed message; everything else is
    /// shown as-is.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => CONNECT_FAILED.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether this error was raised before reaching the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<ureq::Transport> for MathscopeError {
    fn from(err: ureq::Transport) -> Self {
        Self::Transport(err.to_string())
    }
}
