//! Find command implementation.

use crate::cli::FindArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use reachout_coach::{Coach, CoachConfig};
use reachout_rank::rank;

/// Execute the find command.
pub async fn execute_find(args: FindArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let contacts = super::load_contact_set(args.file.as_ref(), args.user.as_deref(), config)?;

    let keywords = match args.keywords {
        Some(keywords) => keywords,
        None => {
            let coach = Coach::new(super::gemini_provider(config)?, CoachConfig::default());
            let keywords = coach.extract_keywords(&args.goal).await?;
            println!(
                "{}",
                formatter.info(&format!("Keywords: {}", keywords.join(", ")))
            );
            keywords
        }
    };

    let ranked = rank(&contacts, &keywords);
    println!("{}", formatter.format_ranked(&ranked)?);

    Ok(())
}
