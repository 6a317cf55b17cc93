//! Error types for batch rendering.
//!
//! [`BatchError`] is the error type of the public pipeline functions. It has
//! exactly two variants, matching the two ways a batch can fail: the data
//! specification is not JSON, or the engine rejected one variable set.

use std::error::Error as _;

/// Errors produced by the batch rendering pipeline.
///
/// Both variants are terminal: the caller must correct its input and try
/// again. No partial output accompanies an error.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// The data specification is not valid JSON.
    #[error("invalid input data: {0}")]
    InvalidInput(String),

    /// The engine failed while rendering the variable set at `index`
    /// (template syntax error, undefined variable, non-mapping context).
    /// The batch stops at the first failure; earlier results are discarded.
    #[error("render failed for variable set {index}: {message}")]
    Render { index: usize, message: String },
}

impl From<serde_json::Error> for BatchError {
    fn from(err: serde_json::Error) -> Self {
        BatchError::InvalidInput(err.to_string())
    }
}

/// Opaque error from a template engine backend.
///
/// Backends map their native error type into this so the pipeline does not
/// depend on any particular engine's error surface.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct EngineError(String);

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The engine's description of the failure.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<minijinja::Error> for EngineError {
    fn from(err: minijinja::Error) -> Self {
        // Fold the source chain into the message so details like which
        // variable was undefined survive the opaque wrapper.
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str("; caused by: ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self(message)
    }
}
