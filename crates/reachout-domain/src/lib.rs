//! Reachout Domain Layer
//!
//! This crate contains the core domain model for Reachout. It defines the
//! fundamental record types and the trait interfaces that all other layers
//! depend upon.
//!
//! ## Key Concepts
//!
//! - **Contact**: a single normalized person record from a bulk export
//! - **RankedContact**: a Contact annotated with a relevance score and a
//!   human-readable match explanation
//! - **Traits**: seams for the LLM provider and the contact store, so the
//!   engine never depends on infrastructure crates
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Infrastructure implementations live in other crates
//! - serde derives on the record types because the Contact shape doubles
//!   as the persistence interchange format

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod ranked;
pub mod traits;

// Re-exports for convenience
pub use contact::Contact;
pub use ranked::RankedContact;
