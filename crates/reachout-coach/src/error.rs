//! Error types for the Coach

use thiserror::Error;

/// Errors that can occur during keyword extraction or message drafting
#[derive(Error, Debug)]
pub enum CoachError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// LLM response could not be parsed into the expected shape
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// Caller-supplied input was unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// LLM call exceeded the configured timeout
    #[error("LLM call timed out")]
    Timeout,
}
