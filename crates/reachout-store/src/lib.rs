//! Reachout Storage Layer
//!
//! Implements the `ContactStore` trait using SQLite.
//!
//! # Architecture
//!
//! The store is deliberately dumb: one row per user holding the full
//! contact sequence as JSON plus a last-saved timestamp. Ingestion order
//! survives the round trip because the sequence is serialized as-is.
//!
//! # Examples
//!
//! ```no_run
//! use reachout_store::SqliteStore;
//!
//! let store = SqliteStore::new("reachout.db").unwrap();
//! // Store is now ready for save/load operations
//! ```

#![warn(missing_docs)]

use reachout_domain::traits::{ContactStore, StoredContacts};
use reachout_domain::Contact;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization error while saving
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored payload could not be decoded
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of `ContactStore`
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// `SqliteStore` instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given database path
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use reachout_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("reachout.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory store (useful for testing)
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    fn now_epoch_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

impl ContactStore for SqliteStore {
    type Error = StoreError;

    fn save_contacts(&mut self, user_id: &str, contacts: &[Contact]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(contacts)?;
        self.conn.execute(
            "INSERT INTO user_contacts (user_id, contacts, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id) DO UPDATE SET
                 contacts = excluded.contacts,
                 updated_at = excluded.updated_at",
            params![user_id, payload, Self::now_epoch_secs()],
        )?;
        Ok(())
    }

    fn load_contacts(&self, user_id: &str) -> Result<Option<StoredContacts>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT contacts, updated_at FROM user_contacts WHERE user_id = ?1",
                params![user_id],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, u64>(1)?)),
            )
            .optional()?;

        match row {
            Some((payload, updated_at)) => {
                let contacts: Vec<Contact> = serde_json::from_str(&payload).map_err(|e| {
                    StoreError::InvalidData(format!("stored contacts corrupt: {}", e))
                })?;
                Ok(Some(StoredContacts {
                    contacts,
                    updated_at,
                }))
            }
            None => Ok(None),
        }
    }
}
