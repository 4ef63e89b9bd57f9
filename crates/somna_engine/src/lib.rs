//! Somna Engine - rule catalogue and single-pass evaluator
//!
//! One analysis call is one pass over the fixed catalogue against one
//! immutable fact set. Every rule whose condition holds fires exactly once;
//! there is no cutoff, no chaining, and no conflict resolution. The
//! accumulator is a fresh [`SleepReport`] per call, so nothing leaks between
//! runs.

pub mod condition;
pub mod rules;

use somna_common::{SleepFacts, SleepReport};
use tracing::{debug, info};

/// Evaluate the full catalogue against the fact set.
///
/// Facts are read-only; unknown keys and values match nothing and never
/// error. Callers are expected to have validated completeness already -
/// with keys missing, rules that test those keys simply do not fire (and
/// negated tests treat absence as "not equal").
pub fn analyze(facts: &SleepFacts) -> SleepReport {
    let catalogue = rules::catalogue();
    let mut report = SleepReport::new();

    for rule in &catalogue {
        if !rule.condition.holds(facts) {
            continue;
        }
        debug!(rule = rule.id, diagnosis = rule.diagnosis, "rule fired");
        report.add_diagnosis(rule.diagnosis, rule.confidence);
        report.extend_recommendations(rule.recommendations.iter().cloned());
    }

    info!(
        diagnoses = report.diagnoses.len(),
        recommendations = report.recommendations.len(),
        "analysis complete"
    );
    report
}
