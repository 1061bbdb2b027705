//! Configuration for the Coach

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Coach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Maximum keywords kept from an extraction response
    pub max_keywords: usize,

    /// Maximum drafted message length (characters); longer drafts are
    /// truncated with a trailing ellipsis
    pub max_message_chars: usize,

    /// Maximum time for a single LLM call (seconds)
    pub llm_timeout_secs: u64,
}

impl CoachConfig {
    /// Get the LLM call timeout as a Duration
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_keywords == 0 {
            return Err("max_keywords must be greater than 0".to_string());
        }
        // Shorter than the ellipsis suffix leaves nothing of the draft
        if self.max_message_chars < 4 {
            return Err("max_message_chars must be at least 4".to_string());
        }
        if self.llm_timeout_secs == 0 {
            return Err("llm_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            max_keywords: 10,
            max_message_chars: 300,
            llm_timeout_secs: 60,
        }
    }
}
