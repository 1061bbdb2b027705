//! Core ingestion: delimited text to normalized contacts

use crate::error::IngestError;
use crate::header::strip_preamble;
use csv::{ReaderBuilder, StringRecord, Trim};
use reachout_domain::Contact;
use tracing::warn;

/// Conventional column names in the export format. Extra or reordered
/// columns are tolerated; lookup is by name, not position.
const COL_FIRST_NAME: &str = "First Name";
const COL_LAST_NAME: &str = "Last Name";
const COL_URL: &str = "URL";
const COL_EMAIL: &str = "Email Address";
const COL_COMPANY: &str = "Company";
const COL_POSITION: &str = "Position";
const COL_CONNECTED_ON: &str = "Connected On";

/// Parse the raw text of a contact export into normalized contacts.
///
/// The result preserves source row order. Rows that fail to parse are
/// logged and skipped; rows that parse but lack the minimum fields
/// (non-empty names plus company or position) are dropped silently.
///
/// # Errors
///
/// Returns [`IngestError::NoValidContacts`] when no row survives the
/// minimum-field filter.
pub fn ingest(raw_text: &str) -> Result<Vec<Contact>, IngestError> {
    let table = strip_preamble(raw_text);

    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .trim(Trim::All)
        // Exports are frequently inconsistent in trailing-column presence;
        // accept short and long rows rather than rejecting usable data
        .flexible(true)
        .from_reader(table.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers);

    let mut contacts = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(row, error = %e, "skipping unrecoverable row");
                continue;
            }
        };

        let contact = columns.contact_from(&record);
        if contact.has_minimum_fields() {
            contacts.push(contact);
        }
    }

    if contacts.is_empty() {
        return Err(IngestError::NoValidContacts);
    }

    Ok(contacts)
}

/// Resolved column positions for one table.
struct ColumnMap {
    first_name: Option<usize>,
    last_name: Option<usize>,
    url: Option<usize>,
    email: Option<usize>,
    company: Option<usize>,
    position: Option<usize>,
    connected_on: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            first_name: find(COL_FIRST_NAME),
            last_name: find(COL_LAST_NAME),
            url: find(COL_URL),
            email: find(COL_EMAIL),
            company: find(COL_COMPANY),
            position: find(COL_POSITION),
            connected_on: find(COL_CONNECTED_ON),
        }
    }

    fn contact_from(&self, record: &StringRecord) -> Contact {
        Contact {
            first_name: self.field(record, self.first_name).to_string(),
            last_name: self.field(record, self.last_name).to_string(),
            company: self.field(record, self.company).to_string(),
            position: self.field(record, self.position).to_string(),
            profile_url: self.optional_field(record, self.url),
            email_address: self.optional_field(record, self.email),
            connected_on: self.field(record, self.connected_on).to_string(),
        }
    }

    /// Field value at a resolved column, or empty when the column is
    /// absent or the row is short.
    fn field<'a>(&self, record: &'a StringRecord, index: Option<usize>) -> &'a str {
        index.and_then(|i| record.get(i)).unwrap_or("")
    }

    fn optional_field(&self, record: &StringRecord, index: Option<usize>) -> Option<String> {
        let value = self.field(record, index);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}
