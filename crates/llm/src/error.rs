//! Errors from the text-generation service.

use thiserror::Error;

/// Errors raised while talking to the generation service.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Error from the underlying HTTP client.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expect.
    #[error("Failed to deserialize JSON response: {0}")]
    JsonDeserialization(#[from] serde_json::Error),

    /// The service answered with a non-success status.
    #[error("API returned an error: Status {status}, Message: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The service answered but produced no text.
    #[error("No content generated")]
    EmptyResponse,

    /// A request was rejected before being sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, LlmError>;

impl From<LlmError> for slidesmith_core::Error {
    fn from(err: LlmError) -> Self {
        slidesmith_core::Error::Generation(err.to_string())
    }
}
