//! Ingest command implementation.

use crate::cli::IngestArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use reachout_domain::traits::ContactStore;

/// Execute the ingest command.
pub async fn execute_ingest(
    args: IngestArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let contacts = super::ingest_file(&args.file)?;

    println!(
        "{}",
        formatter.success(&format!("Ingested {} contact(s)", contacts.len()))
    );
    println!("{}", formatter.format_contacts(&contacts)?);

    if let Some(user) = args.user {
        let mut store = super::open_store(config)?;
        store.save_contacts(&user, &contacts)?;
        println!(
            "{}",
            formatter.success(&format!("Saved contacts for '{}'", user))
        );
    }

    Ok(())
}
