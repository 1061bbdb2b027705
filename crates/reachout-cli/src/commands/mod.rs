//! Command implementations.

pub mod draft;
pub mod find;
pub mod ingest;

pub use self::draft::execute_draft;
pub use self::find::execute_find;
pub use self::ingest::execute_ingest;

use crate::config::Config;
use crate::error::{CliError, Result};
use reachout_domain::traits::ContactStore;
use reachout_domain::Contact;
use reachout_llm::gemini::API_KEY_ENV;
use reachout_llm::GeminiProvider;
use reachout_store::SqliteStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Read an export file and run the ingestor over it.
///
/// File reading is the environment boundary: decode failures surface here
/// as [`CliError::ReadFile`], never from the ingestor itself.
pub(crate) fn ingest_file(path: &Path) -> Result<Vec<Contact>> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(reachout_ingest::ingest(&raw)?)
}

/// Open the configured contact store, creating its directory on first
/// use.
pub(crate) fn open_store(config: &Config) -> Result<SqliteStore> {
    let path = config.store_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(SqliteStore::new(path)?)
}

/// Resolve the contact set for a command that accepts `--file` or `--user`.
pub(crate) fn load_contact_set(
    file: Option<&PathBuf>,
    user: Option<&str>,
    config: &Config,
) -> Result<Vec<Contact>> {
    match (file, user) {
        (Some(path), _) => ingest_file(path),
        (None, Some(user)) => {
            let store = open_store(config)?;
            let stored = store
                .load_contacts(user)?
                .ok_or_else(|| CliError::NoSavedContacts(user.to_string()))?;
            Ok(stored.contacts)
        }
        (None, None) => Err(CliError::InvalidInput(
            "provide a contact source: --file <csv> or --user <id>".to_string(),
        )),
    }
}

/// Build the configured Gemini provider, or explain what is missing.
pub(crate) fn gemini_provider(config: &Config) -> Result<GeminiProvider> {
    let api_key = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            CliError::Config(format!(
                "{API_KEY_ENV} is not set; set it or pass --keywords to skip LLM extraction"
            ))
        })?;
    Ok(GeminiProvider::new(&config.settings.model, api_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_ingest_file_missing_path() {
        let err = ingest_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, CliError::ReadFile { .. }));
    }

    #[test]
    fn test_ingest_file_reads_and_parses() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "First Name,Last Name,Company,Position").unwrap();
        writeln!(file, "Jane,Doe,Acme Co,Product Manager").unwrap();

        let contacts = ingest_file(file.path()).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].full_name(), "Jane Doe");
    }

    #[test]
    fn test_load_contact_set_requires_a_source() {
        let err = load_contact_set(None, None, &Config::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}
