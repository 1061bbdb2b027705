//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use reachout_domain::{Contact, RankedContact};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an ingested contact set.
    pub fn format_contacts(&self, contacts: &[Contact]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(contacts)?),
            OutputFormat::Table => self.format_contacts_table(contacts),
            OutputFormat::Quiet => Ok(contacts
                .iter()
                .map(Contact::full_name)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a ranked result set.
    pub fn format_ranked(&self, ranked: &[RankedContact]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(ranked)?),
            OutputFormat::Table => self.format_ranked_table(ranked),
            OutputFormat::Quiet => Ok(ranked
                .iter()
                .map(|r| r.contact.full_name())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_contacts_table(&self, contacts: &[Contact]) -> Result<String> {
        if contacts.is_empty() {
            return Ok(self.colorize("No contacts.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Position", "Company", "Connected On"]);

        for contact in contacts {
            builder.push_record([
                &contact.full_name(),
                &contact.position,
                &contact.company,
                &contact.connected_on,
            ]);
        }

        Ok(Self::style(builder))
    }

    fn format_ranked_table(&self, ranked: &[RankedContact]) -> Result<String> {
        if ranked.is_empty() {
            return Ok(self.colorize("No matching contacts.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Score", "Name", "Position", "Company", "Matched On"]);

        for entry in ranked {
            builder.push_record([
                &entry.score.to_string(),
                &entry.contact.full_name(),
                &entry.contact.position,
                &entry.contact.company,
                &entry.match_reason(),
            ]);
        }

        Ok(Self::style(builder))
    }

    fn style(builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_contact() -> Contact {
        Contact {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            company: "Acme Co".to_string(),
            position: "Product Manager".to_string(),
            profile_url: None,
            email_address: None,
            connected_on: "01 Jan 2025".to_string(),
        }
    }

    fn test_ranked() -> RankedContact {
        RankedContact {
            contact: test_contact(),
            score: 15,
            match_reasons: vec![
                "Position: product manager".to_string(),
                "Company: acme".to_string(),
            ],
        }
    }

    #[test]
    fn test_contacts_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_contacts(&[test_contact()]).unwrap();
        assert!(output.contains("Jane Doe"));
        assert!(output.contains("Product Manager"));
        assert!(output.contains("Connected On"));
    }

    #[test]
    fn test_ranked_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_ranked(&[test_ranked()]).unwrap();
        assert!(output.contains("\"score\": 15"));
        assert!(output.contains("Position: product manager"));
    }

    #[test]
    fn test_ranked_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_ranked(&[test_ranked()]).unwrap();
        assert_eq!(output, "Jane Doe");
    }

    #[test]
    fn test_ranked_table_carries_match_reason() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_ranked(&[test_ranked()]).unwrap();
        assert!(output.contains("15"));
        assert!(output.contains("Company: acme"));
    }

    #[test]
    fn test_empty_ranked_set() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_ranked(&[]).unwrap();
        assert!(output.contains("No matching contacts"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
