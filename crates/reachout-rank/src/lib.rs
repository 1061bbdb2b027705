//! Reachout Ranker
//!
//! Scores and orders contacts against a list of relevance keywords.
//!
//! # Overview
//!
//! Ranking is a pure transformation: given an immutable contact sequence
//! and a keyword list, it computes a per-contact score by substring
//! containment, drops everything that scored zero, sorts, and truncates to
//! a fixed result-set size. There are no failure modes (empty inputs
//! yield an empty result) and identical inputs always yield identical
//! output, so a caller may re-rank the same contact set against different
//! keyword sets freely, including concurrently.
//!
//! # Example Usage
//!
//! ```
//! use reachout_domain::Contact;
//! use reachout_rank::rank;
//!
//! let contacts = vec![Contact {
//!     first_name: "Jane".to_string(),
//!     last_name: "Doe".to_string(),
//!     company: "Acme Co".to_string(),
//!     position: "Senior Product Manager".to_string(),
//!     profile_url: None,
//!     email_address: None,
//!     connected_on: String::new(),
//! }];
//!
//! let ranked = rank(&contacts, &["product manager".to_string()]);
//! assert_eq!(ranked[0].score, 10);
//! assert_eq!(ranked[0].match_reason(), "Position: product manager");
//! ```

#![warn(missing_docs)]

mod ranker;

pub use ranker::{rank, COMPANY_WEIGHT, MAX_RESULTS, POSITION_WEIGHT};
