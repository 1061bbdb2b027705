//! Reachout LLM Provider Layer
//!
//! Pluggable LLM provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from
//! `reachout-domain`. The engine itself never talks to a model directly;
//! keyword extraction and message drafting (in `reachout-coach`) go
//! through this seam.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use reachout_llm::MockProvider;
//! use reachout_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod gemini;

use reachout_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// API key missing or rejected
    #[error("API key error: {0}")]
    ApiKey(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Queued responses are consumed first-in-first-out; once the queue is
/// empty every call returns the default response.
///
/// # Examples
///
/// ```
/// use reachout_llm::MockProvider;
/// use reachout_domain::traits::LlmProvider;
///
/// let provider = MockProvider::new("fallback");
/// provider.push_response("first");
/// assert_eq!(provider.generate("prompt").unwrap(), "first");
/// assert_eq!(provider.generate("prompt").unwrap(), "fallback");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    queued: Arc<Mutex<VecDeque<String>>>,
    call_count: Arc<Mutex<usize>>,
    fail: bool,
}

impl MockProvider {
    /// Create a provider that returns `response` for every prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            queued: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
            fail: false,
        }
    }

    /// Create a provider that fails every call
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new("")
        }
    }

    /// Queue a one-shot response, consumed before the default
    pub fn push_response(&self, response: impl Into<String>) {
        self.queued.lock().unwrap().push_back(response.into());
    }

    /// Number of times `generate` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, _prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if self.fail {
            return Err(LlmError::Other("Mock error".to_string()));
        }

        if let Some(response) = self.queued.lock().unwrap().pop_front() {
            return Ok(response);
        }

        Ok(self.default_response.clone())
    }
}
