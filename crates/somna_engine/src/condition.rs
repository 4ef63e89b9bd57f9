//! Condition - the predicate language of the rule catalogue
//!
//! Conditions are declared as data on each rule and evaluated against the
//! fact set, in the same spirit as a requirement check over a facts bag:
//! no closures, no engine, just a small recursive enum.

use somna_common::SleepFacts;

/// A test over the fact set.
///
/// Absent keys never satisfy [`Condition::Is`] and always satisfy
/// [`Condition::IsNot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The fact equals the given canonical value
    Is(&'static str, &'static str),
    /// The fact differs from the given value (true when the key is absent)
    IsNot(&'static str, &'static str),
    /// Every listed condition holds
    All(Vec<Condition>),
    /// At least one listed condition holds
    Any(Vec<Condition>),
}

impl Condition {
    pub fn holds(&self, facts: &SleepFacts) -> bool {
        match self {
            Condition::Is(key, value) => facts.is(key, value),
            Condition::IsNot(key, value) => facts.is_not(key, value),
            Condition::All(parts) => parts.iter().all(|part| part.holds(facts)),
            Condition::Any(parts) => parts.iter().any(|part| part.holds(facts)),
        }
    }
}
