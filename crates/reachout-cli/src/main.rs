//! Reachout CLI - Find the contacts that matter for your next goal.

use clap::Parser;
use reachout_cli::commands;
use reachout_cli::{Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Ingest(args) => commands::execute_ingest(args, &config, &formatter).await?,
        Command::Find(args) => commands::execute_find(args, &config, &formatter).await?,
        Command::Draft(args) => commands::execute_draft(args, &config, &formatter).await?,
    }

    Ok(())
}
