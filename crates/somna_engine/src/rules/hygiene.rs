//! Sleep hygiene and daytime habit rules

use super::Rule;
use crate::condition::Condition::{All, Is};
use somna_common::{Priority, Recommendation};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "bedroom-association",
            condition: All(vec![
                Is("sleep_onset", "long"),
                Is("bedroom_activities", "multiple"),
            ]),
            diagnosis: "Poor Sleep Hygiene - Bedroom Association",
            confidence: 0.70,
            recommendations: vec![
                Recommendation::new("Use bedroom only for sleep and intimacy", Priority::High),
                Recommendation::new("Remove TV, work materials from bedroom", Priority::High),
                Recommendation::new(
                    "If can't sleep after 20 min, leave bedroom until sleepy",
                    Priority::Medium,
                ),
            ],
        },
        Rule {
            id: "late-exercise",
            condition: Is("exercise_timing", "late"),
            diagnosis: "Exercise-Related Sleep Disruption",
            confidence: 0.60,
            recommendations: vec![
                Recommendation::new(
                    "Avoid vigorous exercise 3-4 hours before bed",
                    Priority::High,
                ),
                Recommendation::new(
                    "Try morning or afternoon exercise instead",
                    Priority::Medium,
                ),
                Recommendation::new(
                    "Gentle stretching or yoga in evening is okay",
                    Priority::Low,
                ),
            ],
        },
        Rule {
            id: "late-meals",
            condition: Is("meal_timing", "late"),
            diagnosis: "Meal Timing Affecting Sleep",
            confidence: 0.60,
            recommendations: vec![
                Recommendation::new("Avoid large meals 2-3 hours before bed", Priority::High),
                Recommendation::new(
                    "If hungry, try light snack (banana, milk)",
                    Priority::Medium,
                ),
                Recommendation::new(
                    "Avoid spicy or acidic foods in evening",
                    Priority::Medium,
                ),
            ],
        },
        Rule {
            id: "excessive-napping",
            condition: Is("napping", "excessive"),
            diagnosis: "Excessive Daytime Napping",
            confidence: 0.65,
            recommendations: vec![
                Recommendation::new("Limit naps to 20-30 minutes", Priority::High),
                Recommendation::new("Avoid napping after 3 PM", Priority::High),
                Recommendation::new(
                    "If very sleepy, investigate underlying causes",
                    Priority::Medium,
                ),
            ],
        },
    ]
}
