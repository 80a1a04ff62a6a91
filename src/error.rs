//! Error handling for Octsim
//!
//! Every failure is surfaced at the request boundary as an error body with
//! the raw message; none are process-fatal and none trigger retries.

use thiserror::Error;

/// Result type alias for Octsim operations
pub type Result<T> = std::result::Result<T, OctError>;

/// Main error type for Octsim operations
#[derive(Error, Debug)]
pub enum OctError {
    // Input Errors
    #[error("{reason}")]
    InvalidInput { reason: String },

    // Rendering Errors
    #[error("Chart rendering failed: {reason}")]
    Render { reason: String },

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl OctError {
    /// Build an invalid-input error with the given message
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        OctError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            OctError::InvalidInput { .. } => "INVALID_INPUT",
            OctError::Render { .. } => "RENDER_ERROR",
            OctError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the boundary should report this with a client-error status
    ///
    /// The boundary makes no distinction between validation failures and
    /// failures inside the numeric or render pipeline; everything that
    /// reaches it maps to a client error.
    pub fn is_client_error(&self) -> bool {
        match self {
            OctError::InvalidInput { .. } => true,
            OctError::Render { .. } => true,
            OctError::Serialization(_) => true,
        }
    }
}
