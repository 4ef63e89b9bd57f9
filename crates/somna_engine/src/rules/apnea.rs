//! Sleep apnea screening rules

use super::Rule;
use crate::condition::Condition::{All, Any, Is};
use somna_common::{Priority, Recommendation};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "apnea-high-risk",
            condition: All(vec![
                Is("snoring", "loud"),
                Is("breathing_pauses", "yes"),
                Is("daytime_sleepiness", "high"),
            ]),
            diagnosis: "Possible Sleep Apnea (High Risk)",
            confidence: 0.85,
            recommendations: vec![
                Recommendation::new(
                    "URGENT: Consult a sleep specialist immediately",
                    Priority::High,
                ),
                Recommendation::new(
                    "Sleep apnea can be serious and requires medical evaluation",
                    Priority::High,
                ),
            ],
        },
        // The moderate rule also fires alongside the high-risk one; both are
        // reported, each with its own confidence.
        Rule {
            id: "apnea-moderate-risk",
            condition: All(vec![
                Is("snoring", "loud"),
                Any(vec![
                    Is("breathing_pauses", "yes"),
                    Is("daytime_sleepiness", "high"),
                ]),
            ]),
            diagnosis: "Possible Sleep Apnea (Moderate Risk)",
            confidence: 0.65,
            recommendations: vec![
                Recommendation::new("Consider consulting a sleep specialist", Priority::Medium),
                Recommendation::new(
                    "Monitor symptoms and keep a sleep diary",
                    Priority::Medium,
                ),
            ],
        },
    ]
}
