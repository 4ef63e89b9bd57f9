//! Sleep deprivation and mental wellbeing rules

use super::Rule;
use crate::condition::Condition::{All, Any, Is};
use somna_common::{Priority, Recommendation};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "sleep-deprivation",
            condition: All(vec![
                Is("sleep_duration", "insufficient"),
                Is("daytime_sleepiness", "high"),
            ]),
            diagnosis: "Chronic Sleep Deprivation",
            confidence: 0.80,
            recommendations: vec![
                Recommendation::new("Prioritize 7-9 hours of sleep per night", Priority::High),
                Recommendation::new(
                    "Gradually adjust bedtime earlier by 15 min increments",
                    Priority::High,
                ),
                Recommendation::new(
                    "Evaluate and reduce time-wasting activities",
                    Priority::Medium,
                ),
            ],
        },
        Rule {
            id: "anxiety-disturbance",
            condition: All(vec![
                Is("anxiety", "high"),
                Any(vec![
                    Is("sleep_onset", "long"),
                    Is("night_awakenings", "frequent"),
                ]),
            ]),
            diagnosis: "Anxiety-Related Sleep Disturbance",
            confidence: 0.75,
            recommendations: vec![
                Recommendation::new(
                    "Consider therapy or counseling for anxiety",
                    Priority::High,
                ),
                Recommendation::new("Practice mindfulness meditation", Priority::High),
                Recommendation::new("Try 4-7-8 breathing technique", Priority::Medium),
                Recommendation::new("Avoid checking clock during night", Priority::Medium),
            ],
        },
    ]
}
