//! CLI - command-line argument parsing
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Somna sleep advisor CLI
#[derive(Parser)]
#[command(name = "somnactl")]
#[command(about = "Somna - sleep quality advisor", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Subcommand (if not provided, starts the interactive questionnaire)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive questionnaire and analyze the answers
    Quiz,

    /// Analyze a saved answers file
    Analyze {
        /// JSON file mapping question keys to canonical values
        #[arg(long)]
        answers: PathBuf,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the question bank
    Questions {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },
}
