//! Bedroom environment rules

use super::Rule;
use crate::condition::Condition::{Any, Is};
use somna_common::{Priority, Recommendation};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "temperature-issue",
            condition: Any(vec![
                Is("room_temp", "too_hot"),
                Is("room_temp", "too_cold"),
            ]),
            diagnosis: "Environmental Temperature Issue",
            confidence: 0.65,
            recommendations: vec![
                Recommendation::new(
                    "Keep bedroom temperature between 60-67°F (15-19°C)",
                    Priority::High,
                ),
                Recommendation::new("Use breathable bedding materials", Priority::Medium),
                Recommendation::new(
                    "Consider a fan or adjust heating/cooling",
                    Priority::Medium,
                ),
            ],
        },
        Rule {
            id: "light-pollution",
            condition: Is("bedroom_light", "bright"),
            diagnosis: "Light Pollution Affecting Sleep",
            confidence: 0.70,
            recommendations: vec![
                Recommendation::new("Use blackout curtains or eye mask", Priority::High),
                Recommendation::new(
                    "Remove or cover LED lights from devices",
                    Priority::Medium,
                ),
                Recommendation::new("Use dim red lights if nightlight needed", Priority::Low),
            ],
        },
        Rule {
            id: "noise-disruption",
            condition: Is("bedroom_noise", "high"),
            diagnosis: "Noise-Related Sleep Disruption",
            confidence: 0.65,
            recommendations: vec![
                Recommendation::new("Use white noise machine or fan", Priority::High),
                Recommendation::new("Try earplugs designed for sleeping", Priority::Medium),
                Recommendation::new("Address noise sources if possible", Priority::Medium),
            ],
        },
    ]
}
