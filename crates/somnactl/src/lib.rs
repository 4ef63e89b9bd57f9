//! Somnactl - terminal front end for the Somna sleep advisor
//!
//! Collects the questionnaire (interactively or from an answers file),
//! calls the engine, and renders the report. All analysis logic lives in
//! `somna_engine`; this crate is presentation and validation only.

pub mod answers;
pub mod cli;
pub mod commands;
pub mod output;
pub mod quiz;
