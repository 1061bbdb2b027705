//! Error types for the Ingestor

use thiserror::Error;

/// Errors that can occur during ingestion
///
/// Row-level irregularities are recovered locally (logged, not raised);
/// ingestion only fails when nothing usable survives.
#[derive(Error, Debug)]
pub enum IngestError {
    /// No row satisfied the minimum field requirement. The message names
    /// the columns a usable export must carry so callers can surface
    /// actionable guidance.
    #[error(
        "no valid contacts found; ensure the export has 'First Name', \
         'Last Name', and either 'Company' or 'Position' columns"
    )]
    NoValidContacts,

    /// The header row itself could not be read
    #[error("failed to read header row: {0}")]
    Header(#[from] csv::Error),
}
