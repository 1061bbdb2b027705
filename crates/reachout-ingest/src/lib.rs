//! Reachout Ingestor
//!
//! Converts the raw text of a bulk contact export into an ordered sequence
//! of normalized [`Contact`](reachout_domain::Contact) records.
//!
//! # Overview
//!
//! Bulk exports are semi-structured at best: metadata lines before the real
//! header, inconsistent trailing columns, stray quotes. The ingestor is
//! deliberately lenient: it locates the header row by scanning a bounded
//! window, recovers what it can from irregular rows, and only fails when
//! the table contains no usable contact at all.
//!
//! # Example Usage
//!
//! ```
//! use reachout_ingest::ingest;
//!
//! let raw = "First Name,Last Name,Company,Position\n\
//!            Jane,Doe,Acme Co,Product Manager\n";
//!
//! let contacts = ingest(raw).unwrap();
//! assert_eq!(contacts.len(), 1);
//! assert_eq!(contacts[0].full_name(), "Jane Doe");
//! ```

#![warn(missing_docs)]

mod error;
mod header;
mod ingestor;

pub use error::IngestError;
pub use ingestor::ingest;
