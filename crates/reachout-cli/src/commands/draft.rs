//! Draft command implementation.

use crate::cli::DraftArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use reachout_coach::{Coach, CoachConfig};

/// Execute the draft command.
pub async fn execute_draft(args: DraftArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let contacts = super::load_contact_set(args.file.as_ref(), args.user.as_deref(), config)?;

    let wanted = args.name.trim().to_lowercase();
    let contact = contacts
        .iter()
        .find(|c| c.full_name().to_lowercase() == wanted)
        .ok_or_else(|| CliError::ContactNotFound(args.name.clone()))?;

    let coach = Coach::new(super::gemini_provider(config)?, CoachConfig::default());
    let message = coach.draft_message(contact, &args.goal).await?;

    println!(
        "{}",
        formatter.success(&format!("Draft for {}", contact.full_name()))
    );
    println!();
    println!("{}", message);

    Ok(())
}
