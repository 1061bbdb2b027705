//! Reachout Coach
//!
//! Turns a free-text professional goal into relevance keywords, and a
//! ranked contact into a short outreach greeting, using an LLM.
//!
//! # Overview
//!
//! The coach is the natural-language collaborator around the engine: the
//! engine itself only understands keywords and substring containment, so
//! the coach asks a model to distill a goal like "break into product
//! management" into the titles, industries and company names that would
//! appear in a contact export's Position or Company column. It also drafts
//! the first-touch message once a contact has been picked.
//!
//! # Architecture
//!
//! ```text
//! Goal → Coach → LLM → keywords → Ranker
//! RankedContact + Goal → Coach → LLM → greeting
//! ```
//!
//! LLM output is untrusted: responses are parsed leniently (markdown
//! fences stripped, bracketed-array fallback) and validated before use.
//!
//! # Example Usage
//!
//! ```
//! use reachout_coach::{Coach, CoachConfig};
//! use reachout_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"["product manager", "acme"]"#);
//! let coach = Coach::new(llm, CoachConfig::default());
//!
//! let keywords = coach.extract_keywords("land a PM role").await?;
//! assert_eq!(keywords, vec!["product manager", "acme"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod coach;
mod config;
mod error;
mod parser;
mod prompt;

pub use coach::Coach;
pub use config::CoachConfig;
pub use error::CoachError;
