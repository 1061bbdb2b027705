//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export file could not be read or decoded
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        /// Path the caller asked for
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Ingestion error
    #[error(transparent)]
    Ingest(#[from] reachout_ingest::IngestError),

    /// Coach (LLM) error
    #[error(transparent)]
    Coach(#[from] reachout_coach::CoachError),

    /// Contact store error
    #[error(transparent)]
    Store(#[from] reachout_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No stored contact set for the given user
    #[error("No saved contacts for user '{0}'. Run 'reachout ingest --user {0} <file>' first.")]
    NoSavedContacts(String),

    /// Named contact not present in the contact set
    #[error("No contact named '{0}' in the contact set")]
    ContactNotFound(String),
}
