//! Somnactl - sleep questionnaire and advisor CLI

use anyhow::Result;
use clap::Parser;
use somnactl::cli::{Cli, Commands};
use somnactl::commands;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        None | Some(Commands::Quiz) => commands::run_quiz(),
        Some(Commands::Analyze { answers, json }) => commands::analyze(&answers, json),
        Some(Commands::Questions { json }) => commands::questions(json),
    }
}
