//! Error types for the Somna crates
//!
//! Evaluation itself never fails: unknown keys and values are inert. Errors
//! only exist at the collector boundary, before the engine is called.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SomnaError {
    /// The questionnaire is not fully answered; analysis is refused until
    /// every recognized key has a value.
    #[error("{count} question(s) remaining - answer all questions before analyzing")]
    IncompleteAnswers {
        missing: Vec<String>,
        count: usize,
    },

    #[error("could not read answers file")]
    AnswersIo(#[from] std::io::Error),

    #[error("malformed answers file")]
    AnswersFormat(#[from] serde_json::Error),
}

impl SomnaError {
    pub fn incomplete(missing: Vec<String>) -> Self {
        let count = missing.len();
        SomnaError::IncompleteAnswers { missing, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_message_counts_remaining_questions() {
        let err = SomnaError::incomplete(vec!["snoring".into(), "room_temp".into()]);
        assert_eq!(
            err.to_string(),
            "2 question(s) remaining - answer all questions before analyzing"
        );
    }
}
