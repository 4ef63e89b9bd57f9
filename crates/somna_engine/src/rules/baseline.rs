//! Baseline outcomes: healthy pattern and the insufficient-information catch

use super::Rule;
use crate::condition::Condition::{All, Is, IsNot};
use somna_common::{Priority, Recommendation};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "healthy-pattern",
            condition: All(vec![
                Is("sleep_quality", "good"),
                Is("sleep_duration", "adequate"),
                Is("daytime_sleepiness", "low"),
            ]),
            diagnosis: "Healthy Sleep Pattern",
            confidence: 0.90,
            recommendations: vec![
                Recommendation::new(
                    "Your sleep appears healthy - maintain current habits!",
                    Priority::Low,
                ),
                Recommendation::new("Continue consistent sleep schedule", Priority::Low),
            ],
        },
        // Fires on any sleep_quality outside {good, poor}, including an
        // unanswered question - negation treats absence as "not equal".
        Rule {
            id: "insufficient-information",
            condition: All(vec![
                IsNot("sleep_quality", "good"),
                IsNot("sleep_quality", "poor"),
            ]),
            diagnosis: "Insufficient Information",
            confidence: 0.50,
            recommendations: vec![
                Recommendation::new("Keep a detailed sleep diary for 2 weeks", Priority::High),
                Recommendation::new(
                    "Track bedtime, wake time, and sleep quality",
                    Priority::High,
                ),
                Recommendation::new(
                    "Note factors like caffeine, exercise, stress",
                    Priority::Medium,
                ),
            ],
        },
    ]
}
