//! Sleep fact set - normalized questionnaire answers
//!
//! Facts are a plain ordered map from question key to canonical value. The
//! engine only ever reads them through [`SleepFacts::is`] and
//! [`SleepFacts::is_not`], which give absence the semantics the rules need:
//! an unanswered key matches no concrete value, and a negated test treats it
//! as "not equal". Unrecognized keys or values are carried but inert.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The 25 recognized question keys, in questionnaire order.
pub const QUESTION_KEYS: [&str; 25] = [
    "sleep_quality",
    "sleep_onset",
    "night_awakenings",
    "sleep_duration",
    "daytime_sleepiness",
    "snoring",
    "breathing_pauses",
    "caffeine_timing",
    "screen_time",
    "racing_thoughts",
    "stress_level",
    "anxiety",
    "schedule_consistency",
    "shift_work",
    "irregular_bedtime",
    "room_temp",
    "bedroom_light",
    "bedroom_noise",
    "bedroom_activities",
    "alcohol_consumption",
    "exercise_timing",
    "meal_timing",
    "napping",
    "leg_discomfort",
    "urge_to_move",
];

/// Normalized questionnaire answers keyed by question id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SleepFacts {
    answers: BTreeMap<String, String>,
}

impl SleepFacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous value for the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }

    /// Equality test; an absent key matches nothing
    pub fn is(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    /// Negated equality; true when the key is absent
    pub fn is_not(&self, key: &str, value: &str) -> bool {
        !self.is(key, value)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Recognized keys that have not been answered yet, in questionnaire order
    pub fn missing_keys(&self) -> Vec<&'static str> {
        QUESTION_KEYS
            .iter()
            .copied()
            .filter(|key| !self.answers.contains_key(*key))
            .collect()
    }

    /// True once every recognized question has an answer
    pub fn is_complete(&self) -> bool {
        self.missing_keys().is_empty()
    }
}

impl FromIterator<(String, String)> for SleepFacts {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
