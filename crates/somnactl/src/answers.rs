//! Answers file loading and validation
//!
//! The answers file is a flat JSON object of question key -> canonical
//! value. Completeness is enforced here, before the engine boundary; the
//! evaluator itself never rejects input. Unrecognized keys or values are
//! logged and left inert - they match no rule.

use somna_common::{question_for_key, SleepFacts, SomnaError};
use std::path::Path;
use tracing::warn;

pub fn load_answers(path: &Path) -> Result<SleepFacts, SomnaError> {
    let raw = std::fs::read_to_string(path)?;
    let facts: SleepFacts = serde_json::from_str(&raw)?;
    validate(&facts)?;
    Ok(facts)
}

/// Refuse analysis until every recognized question has an answer
pub fn validate(facts: &SleepFacts) -> Result<(), SomnaError> {
    for (key, value) in facts.iter() {
        match question_for_key(key) {
            None => warn!(key, "unrecognized question key, it will match no rule"),
            Some(question) if !question.canonical_values().contains(&value) => {
                warn!(key, value, "unrecognized answer value, it will match no rule");
            }
            Some(_) => {}
        }
    }

    let missing = facts.missing_keys();
    if !missing.is_empty() {
        return Err(SomnaError::incomplete(
            missing.into_iter().map(String::from).collect(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use somna_common::{question_bank, QUESTION_KEYS};

    fn complete_facts() -> SleepFacts {
        let mut facts = SleepFacts::new();
        for question in question_bank() {
            facts.set(question.key, question.options[0].canonical);
        }
        facts
    }

    #[test]
    fn complete_answers_validate() {
        assert!(validate(&complete_facts()).is_ok());
    }

    #[test]
    fn missing_answers_are_rejected_with_a_count() {
        let mut facts = SleepFacts::new();
        facts.set(QUESTION_KEYS[0], "good");
        let err = validate(&facts).unwrap_err();
        match err {
            SomnaError::IncompleteAnswers { missing, count } => {
                assert_eq!(count, 24);
                assert_eq!(missing.len(), 24);
                assert!(!missing.contains(&QUESTION_KEYS[0].to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unrecognized_entries_do_not_fail_validation() {
        let mut facts = complete_facts();
        facts.set("favorite_color", "blue");
        facts.set("snoring", "thunderous");
        assert!(validate(&facts).is_ok());
    }
}
