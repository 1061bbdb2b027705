//! Core Coach implementation

use crate::config::CoachConfig;
use crate::error::CoachError;
use crate::parser::parse_keywords;
use crate::prompt::{draft_prompt, keyword_prompt};
use reachout_domain::traits::LlmProvider;
use reachout_domain::Contact;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// The Coach wraps an LLM provider for keyword extraction and message
/// drafting
pub struct Coach<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: CoachConfig,
}

impl<L> Coach<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Coach
    pub fn new(provider: L, config: CoachConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Distill a free-text professional goal into relevance keywords.
    ///
    /// Returns at most `max_keywords` keywords in the order the model
    /// produced them. Blank-keyword filtering is the ranker's concern;
    /// this returns whatever strings the model chose.
    pub async fn extract_keywords(&self, goal: &str) -> Result<Vec<String>, CoachError> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(CoachError::InvalidInput("goal must not be empty".to_string()));
        }

        let prompt = keyword_prompt(goal, self.config.max_keywords);
        debug!(prompt_len = prompt.len(), "requesting keyword extraction");

        let response = self.call_llm(prompt).await?;
        let keywords = parse_keywords(&response, self.config.max_keywords)?;

        info!(count = keywords.len(), "extracted keywords");
        Ok(keywords)
    }

    /// Draft a short outreach greeting for one contact and the original
    /// goal.
    ///
    /// The drafted message is clamped to the configured maximum length
    /// (truncated with a trailing ellipsis when the model overshoots).
    pub async fn draft_message(&self, contact: &Contact, goal: &str) -> Result<String, CoachError> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(CoachError::InvalidInput("goal must not be empty".to_string()));
        }
        if contact.full_name().trim().is_empty() {
            return Err(CoachError::InvalidInput(
                "contact name must not be empty".to_string(),
            ));
        }

        let prompt = draft_prompt(contact, goal, self.config.max_message_chars);
        debug!(prompt_len = prompt.len(), "requesting message draft");

        let response = self.call_llm(prompt).await?;
        Ok(self.clamp_message(response.trim().to_string()))
    }

    fn clamp_message(&self, message: String) -> String {
        let max = self.config.max_message_chars;
        if message.chars().count() <= max {
            return message;
        }
        // Limits under the ellipsis width would underflow the cut point;
        // hard-truncate instead
        if max <= 3 {
            return message.chars().take(max).collect();
        }
        let cut: String = message.chars().take(max - 3).collect();
        format!("{cut}...")
    }

    /// Call the LLM provider in a blocking task, bounded by the configured
    /// timeout
    async fn call_llm(&self, prompt: String) -> Result<String, CoachError> {
        let llm = Arc::clone(&self.provider);

        let call = tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| CoachError::Llm(e.to_string()))
        });

        timeout(self.config.llm_timeout(), call)
            .await
            .map_err(|_| CoachError::Timeout)?
            .map_err(|e| CoachError::Llm(format!("Task join error: {}", e)))?
    }
}
