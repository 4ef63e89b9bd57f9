//! Command execution
//!
//! Thin glue between the CLI surface, the collector, and the engine.

use crate::{answers, output, quiz};
use anyhow::{Context, Result};
use somna_common::question_bank;
use std::path::Path;
use tracing::info;

/// Interactive questionnaire followed by analysis
pub fn run_quiz() -> Result<()> {
    let facts = quiz::run()?;
    answers::validate(&facts).context("analysis failed")?;

    info!(answers = facts.len(), "questionnaire complete");
    let report = somna_engine::analyze(&facts);
    output::print_report(&report);
    Ok(())
}

/// Analyze a saved answers file
pub fn analyze(path: &Path, json: bool) -> Result<()> {
    let facts = answers::load_answers(path)
        .with_context(|| format!("analysis failed for {}", path.display()))?;

    let report = somna_engine::analyze(&facts);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }
    Ok(())
}

/// Print the question bank
pub fn questions(json: bool) -> Result<()> {
    let bank = question_bank();
    if json {
        println!("{}", serde_json::to_string_pretty(&bank)?);
    } else {
        print!("{}", output::format_question_bank(&bank));
    }
    Ok(())
}
