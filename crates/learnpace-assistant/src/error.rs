//! Assistant error types.

use thiserror::Error;

/// Errors that can occur when talking to the conversational backend.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No API key was found in the environment.
    #[error("missing API key: set {0}")]
    MissingApiKey(&'static str),

    /// The requested model does not exist.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The backend returned no text.
    #[error("backend returned an empty response")]
    EmptyResponse,

    /// The backend failed for any other reason.
    #[error("backend error: {0}")]
    Backend(String),
}
