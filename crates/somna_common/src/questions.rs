//! Question bank - the 25 fixed-choice questions and their normalization
//!
//! Each displayed option maps to a canonical value; several options may
//! normalize to the same value (e.g. "Less than 15 minutes" and
//! "15-30 minutes" both mean a `normal` sleep onset). This table is the only
//! place the UI wording and the canonical vocabulary meet - the engine never
//! sees option labels.

use crate::facts::QUESTION_KEYS;
use serde::Serialize;

/// A selectable answer: display label plus the canonical value it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub canonical: &'static str,
}

/// One questionnaire entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Stable fact key, e.g. `sleep_onset`
    pub key: &'static str,
    pub prompt: &'static str,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Map a displayed option label to its canonical value
    pub fn normalize(&self, label: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|opt| opt.label == label)
            .map(|opt| opt.canonical)
    }

    /// Distinct canonical values this question can produce, in option order
    pub fn canonical_values(&self) -> Vec<&'static str> {
        let mut values = Vec::new();
        for opt in &self.options {
            if !values.contains(&opt.canonical) {
                values.push(opt.canonical);
            }
        }
        values
    }
}

fn opt(label: &'static str, canonical: &'static str) -> AnswerOption {
    AnswerOption { label, canonical }
}

/// The full questionnaire in presentation order
pub fn question_bank() -> Vec<Question> {
    vec![
        Question {
            key: "sleep_quality",
            prompt: "How would you rate your overall sleep quality?",
            options: vec![
                opt("Excellent", "excellent"),
                opt("Good", "good"),
                opt("Fair", "fair"),
                opt("Poor", "poor"),
                opt("Very Poor", "very_poor"),
            ],
        },
        Question {
            key: "sleep_onset",
            prompt: "How long does it typically take you to fall asleep?",
            options: vec![
                opt("Less than 15 minutes", "normal"),
                opt("15-30 minutes", "normal"),
                opt("30-60 minutes", "long"),
                opt("More than 60 minutes", "long"),
            ],
        },
        Question {
            key: "night_awakenings",
            prompt: "How many times do you wake up during the night?",
            options: vec![
                opt("0 times", "none"),
                opt("1-2 times", "occasional"),
                opt("3-4 times", "frequent"),
                opt("5+ times", "frequent"),
            ],
        },
        Question {
            key: "sleep_duration",
            prompt: "How many hours of sleep do you get per night on average?",
            options: vec![
                opt("Less than 5 hours", "insufficient"),
                opt("5-6 hours", "insufficient"),
                opt("6-7 hours", "adequate"),
                opt("7-9 hours", "adequate"),
                opt("More than 9 hours", "excessive"),
            ],
        },
        Question {
            key: "daytime_sleepiness",
            prompt: "Do you feel excessively sleepy during the day?",
            options: vec![
                opt("Not at all", "low"),
                opt("Occasionally", "medium"),
                opt("Frequently", "high"),
                opt("All the time", "high"),
            ],
        },
        Question {
            key: "snoring",
            prompt: "Do you snore loudly?",
            options: vec![
                opt("No", "none"),
                opt("Occasionally", "mild"),
                opt("Yes, frequently", "loud"),
                opt("I don't know", "unknown"),
            ],
        },
        Question {
            key: "breathing_pauses",
            prompt: "Has anyone noticed you stop breathing during sleep?",
            options: vec![
                opt("Yes", "yes"),
                opt("No", "no"),
                opt("I sleep alone/Don't know", "unknown"),
            ],
        },
        Question {
            key: "caffeine_timing",
            prompt: "When do you consume your last caffeinated beverage?",
            options: vec![
                opt("I don't consume caffeine", "none"),
                opt("Before noon", "early"),
                opt("12 PM - 2 PM", "early"),
                opt("After 2 PM", "late"),
            ],
        },
        Question {
            key: "screen_time",
            prompt: "How much screen time do you have in the hour before bed?",
            options: vec![
                opt("None", "low"),
                opt("Less than 30 minutes", "low"),
                opt("30-60 minutes", "medium"),
                opt("More than 60 minutes", "high"),
            ],
        },
        Question {
            key: "racing_thoughts",
            prompt: "Do you experience racing thoughts when trying to sleep?",
            options: vec![
                opt("Never", "no"),
                opt("Occasionally", "sometimes"),
                opt("Frequently", "yes"),
                opt("Always", "yes"),
            ],
        },
        Question {
            key: "stress_level",
            prompt: "How would you rate your current stress level?",
            options: vec![
                opt("Low", "low"),
                opt("Moderate", "medium"),
                opt("High", "high"),
                opt("Very High", "high"),
            ],
        },
        Question {
            key: "anxiety",
            prompt: "Do you experience anxiety symptoms?",
            options: vec![
                opt("No", "low"),
                opt("Mild", "medium"),
                opt("Moderate", "high"),
                opt("Severe", "high"),
            ],
        },
        Question {
            key: "schedule_consistency",
            prompt: "How consistent is your sleep schedule (bedtime and wake time)?",
            options: vec![
                opt("Very consistent (within 30 min)", "good"),
                opt("Somewhat consistent (within 1 hour)", "fair"),
                opt("Inconsistent (varies by 1-2 hours)", "poor"),
                opt("Very inconsistent (varies by 2+ hours)", "poor"),
            ],
        },
        Question {
            key: "shift_work",
            prompt: "Do you work shifts or have an irregular work schedule?",
            options: vec![
                opt("No, regular schedule", "no"),
                opt("Yes, rotating shifts", "yes"),
                opt("Yes, night shifts", "yes"),
                opt("Yes, irregular hours", "yes"),
            ],
        },
        Question {
            key: "irregular_bedtime",
            prompt: "Do you go to bed at different times each night?",
            options: vec![
                opt("No, usually same time", "no"),
                opt("Sometimes varies", "sometimes"),
                opt("Yes, very irregular", "yes"),
            ],
        },
        Question {
            key: "room_temp",
            prompt: "How is your bedroom temperature?",
            options: vec![
                opt("Too cold", "too_cold"),
                opt("Comfortable (60-67°F)", "comfortable"),
                opt("Too hot", "too_hot"),
            ],
        },
        Question {
            key: "bedroom_light",
            prompt: "How dark is your bedroom at night?",
            options: vec![
                opt("Very dark", "dark"),
                opt("Some light", "dim"),
                opt("Bright/Light pollution", "bright"),
            ],
        },
        Question {
            key: "bedroom_noise",
            prompt: "How noisy is your bedroom environment?",
            options: vec![
                opt("Very quiet", "low"),
                opt("Some noise", "medium"),
                opt("Noisy", "high"),
            ],
        },
        Question {
            key: "bedroom_activities",
            prompt: "Do you use your bedroom for activities other than sleep?",
            options: vec![
                opt("No, only for sleep", "sleep_only"),
                opt("Yes, occasionally", "some"),
                opt("Yes, frequently (TV, work, etc.)", "multiple"),
            ],
        },
        Question {
            key: "alcohol_consumption",
            prompt: "Do you consume alcohol within 3 hours of bedtime?",
            options: vec![
                opt("Never", "no"),
                opt("Occasionally", "sometimes"),
                opt("Frequently", "yes"),
                opt("Daily", "yes"),
            ],
        },
        Question {
            key: "exercise_timing",
            prompt: "When do you typically exercise?",
            options: vec![
                opt("I don't exercise regularly", "none"),
                opt("Morning", "early"),
                opt("Afternoon", "early"),
                opt("Within 3 hours of bedtime", "late"),
            ],
        },
        Question {
            key: "meal_timing",
            prompt: "When do you eat your last meal?",
            options: vec![
                opt("3+ hours before bed", "early"),
                opt("2-3 hours before bed", "moderate"),
                opt("Within 2 hours of bed", "late"),
                opt("Right before bed", "late"),
            ],
        },
        Question {
            key: "napping",
            prompt: "How often do you nap during the day?",
            options: vec![
                opt("Never", "none"),
                opt("Occasionally (< 30 min)", "moderate"),
                opt("Frequently (30+ min)", "excessive"),
                opt("Daily long naps", "excessive"),
            ],
        },
        Question {
            key: "leg_discomfort",
            prompt: "Do you experience leg discomfort or restlessness at night?",
            options: vec![
                opt("No", "no"),
                opt("Occasionally", "sometimes"),
                opt("Frequently", "yes"),
                opt("Always", "yes"),
            ],
        },
        Question {
            key: "urge_to_move",
            prompt: "Do you have an irresistible urge to move your legs when lying down?",
            options: vec![
                opt("No", "no"),
                opt("Sometimes", "sometimes"),
                opt("Yes", "yes"),
            ],
        },
    ]
}

/// Look up a question by its fact key
pub fn question_for_key(key: &str) -> Option<Question> {
    question_bank().into_iter().find(|q| q.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_covers_exactly_the_recognized_keys_in_order() {
        let bank = question_bank();
        let keys: Vec<&str> = bank.iter().map(|q| q.key).collect();
        assert_eq!(keys, QUESTION_KEYS);
    }

    #[test]
    fn every_question_has_at_least_two_options() {
        for q in question_bank() {
            assert!(q.options.len() >= 2, "{} has too few options", q.key);
        }
    }

    #[test]
    fn onset_options_collapse_to_two_canonical_values() {
        let q = question_for_key("sleep_onset").unwrap();
        assert_eq!(q.normalize("Less than 15 minutes"), Some("normal"));
        assert_eq!(q.normalize("15-30 minutes"), Some("normal"));
        assert_eq!(q.normalize("More than 60 minutes"), Some("long"));
        assert_eq!(q.canonical_values(), vec!["normal", "long"]);
    }

    #[test]
    fn unknown_label_does_not_normalize() {
        let q = question_for_key("snoring").unwrap();
        assert_eq!(q.normalize("Constantly"), None);
        assert_eq!(q.canonical_values(), vec!["none", "mild", "loud", "unknown"]);
    }
}
