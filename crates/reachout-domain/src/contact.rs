//! Contact module - the fundamental record of Reachout

use serde::{Deserialize, Serialize};

/// A single normalized person record from a bulk contact export.
///
/// Contacts are produced by the ingestor and treated as immutable input by
/// every downstream component; ranking never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Given name. Non-empty for every ingested contact.
    pub first_name: String,

    /// Family name. Non-empty for every ingested contact.
    pub last_name: String,

    /// Employer name. May be empty when only a position is known.
    #[serde(default)]
    pub company: String,

    /// Stated role. May be empty when only a company is known.
    #[serde(default)]
    pub position: String,

    /// Public profile URL, when the export carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,

    /// Email address, when the export carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// Opaque date string from the export. Never parsed further.
    #[serde(default)]
    pub connected_on: String,
}

impl Contact {
    /// Full display name, `"<first> <last>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use reachout_domain::Contact;
    ///
    /// let contact = Contact {
    ///     first_name: "Jane".to_string(),
    ///     last_name: "Doe".to_string(),
    ///     company: "Acme Co".to_string(),
    ///     position: "Product Manager".to_string(),
    ///     profile_url: None,
    ///     email_address: None,
    ///     connected_on: String::new(),
    /// };
    /// assert_eq!(contact.full_name(), "Jane Doe");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this record satisfies the minimum field requirement:
    /// non-empty first and last name, and at least one of company or
    /// position non-empty. The ingestor drops rows that fail this.
    pub fn has_minimum_fields(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && (!self.company.is_empty() || !self.position.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: &str, last: &str, company: &str, position: &str) -> Contact {
        Contact {
            first_name: first.to_string(),
            last_name: last.to_string(),
            company: company.to_string(),
            position: position.to_string(),
            profile_url: None,
            email_address: None,
            connected_on: String::new(),
        }
    }

    #[test]
    fn test_minimum_fields_complete_record() {
        assert!(contact("Jane", "Doe", "Acme Co", "Product Manager").has_minimum_fields());
    }

    #[test]
    fn test_minimum_fields_company_only() {
        assert!(contact("Jane", "Doe", "Acme Co", "").has_minimum_fields());
    }

    #[test]
    fn test_minimum_fields_position_only() {
        assert!(contact("Jane", "Doe", "", "Product Manager").has_minimum_fields());
    }

    #[test]
    fn test_minimum_fields_missing_name() {
        assert!(!contact("", "Doe", "Acme Co", "Product Manager").has_minimum_fields());
        assert!(!contact("Jane", "", "Acme Co", "Product Manager").has_minimum_fields());
    }

    #[test]
    fn test_minimum_fields_no_company_or_position() {
        assert!(!contact("Jane", "Doe", "", "").has_minimum_fields());
    }
}
