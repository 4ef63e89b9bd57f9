//! Somna Common - Shared types for the Somna sleep advisor
//!
//! Data model only: question bank, fact set, priorities, report, errors.
//! No rule logic lives here; the catalogue and the evaluator are in
//! `somna_engine`.

pub mod error;
pub mod facts;
pub mod questions;
pub mod report;
pub mod types;

pub use error::*;
pub use facts::*;
pub use questions::*;
pub use report::*;
pub use types::*;
