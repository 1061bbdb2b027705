//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reachout CLI - Find the contacts that matter for your next goal.
#[derive(Debug, Parser)]
#[command(name = "reachout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a bulk contact export into normalized contacts
    Ingest(IngestArgs),

    /// Find and rank the contacts relevant to a goal
    Find(FindArgs),

    /// Draft an outreach message to one contact
    Draft(DraftArgs),
}

/// Arguments for the ingest command.
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// Path to the exported CSV file
    pub file: PathBuf,

    /// Save the ingested contacts under this user id
    #[arg(short, long)]
    pub user: Option<String>,
}

/// Arguments for the find command.
#[derive(Debug, Parser)]
pub struct FindArgs {
    /// Free-text professional goal
    pub goal: String,

    /// Read contacts from an export file
    #[arg(long, conflicts_with = "user")]
    pub file: Option<PathBuf>,

    /// Read contacts previously saved under this user id
    #[arg(short, long)]
    pub user: Option<String>,

    /// Comma-separated keywords, bypassing LLM extraction
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Option<Vec<String>>,
}

/// Arguments for the draft command.
#[derive(Debug, Parser)]
pub struct DraftArgs {
    /// Free-text professional goal
    pub goal: String,

    /// Full name of the contact to write to ("First Last")
    #[arg(short, long)]
    pub name: String,

    /// Read contacts from an export file
    #[arg(long, conflicts_with = "user")]
    pub file: Option<PathBuf>,

    /// Read contacts previously saved under this user id
    #[arg(short, long)]
    pub user: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_command() {
        let cli = Cli::parse_from(["reachout", "ingest", "connections.csv", "--user", "me"]);
        match cli.command {
            Command::Ingest(args) => {
                assert_eq!(args.file, PathBuf::from("connections.csv"));
                assert_eq!(args.user.as_deref(), Some("me"));
            }
            _ => panic!("Expected Ingest command"),
        }
    }

    #[test]
    fn test_find_command_with_keywords() {
        let cli = Cli::parse_from([
            "reachout",
            "find",
            "break into fintech",
            "--file",
            "connections.csv",
            "--keywords",
            "fintech,payments, product manager",
        ]);
        match cli.command {
            Command::Find(args) => {
                assert_eq!(args.goal, "break into fintech");
                assert_eq!(
                    args.keywords,
                    Some(vec![
                        "fintech".to_string(),
                        "payments".to_string(),
                        " product manager".to_string(),
                    ])
                );
            }
            _ => panic!("Expected Find command"),
        }
    }

    #[test]
    fn test_draft_command() {
        let cli = Cli::parse_from([
            "reachout",
            "draft",
            "a move into product",
            "--name",
            "Jane Doe",
            "--user",
            "me",
        ]);
        match cli.command {
            Command::Draft(args) => {
                assert_eq!(args.name, "Jane Doe");
                assert_eq!(args.user.as_deref(), Some("me"));
            }
            _ => panic!("Expected Draft command"),
        }
    }

    #[test]
    fn test_file_and_user_conflict() {
        let result = Cli::try_parse_from([
            "reachout", "find", "goal", "--file", "a.csv", "--user", "me",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["reachout", "--format", "json", "ingest", "a.csv"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }
}
