//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the engine and the
//! infrastructure. Implementations live in other crates.

use crate::Contact;

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (reachout-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for storing and retrieving a user's contact set
///
/// The store is a pass-through cache of ingestor output keyed by user
/// identity; it carries no schema logic of its own beyond serializing the
/// Contact shape. Implemented by the infrastructure layer
/// (reachout-store).
pub trait ContactStore {
    /// Error type for store operations
    type Error;

    /// Save (insert or replace) the full contact set for a user
    fn save_contacts(&mut self, user_id: &str, contacts: &[Contact]) -> Result<(), Self::Error>;

    /// Load the stored contact set for a user, or `None` if the user has
    /// never saved one
    fn load_contacts(&self, user_id: &str) -> Result<Option<StoredContacts>, Self::Error>;
}

/// A stored contact set together with its last-saved timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContacts {
    /// The contact sequence exactly as saved, in ingestion order
    pub contacts: Vec<Contact>,

    /// Seconds since the Unix epoch at the time of the last save
    pub updated_at: u64,
}
