//! Circadian rhythm rules

use super::Rule;
use crate::condition::Condition::{All, Any, Is};
use somna_common::{Priority, Recommendation};

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule {
        id: "circadian-disruption",
        condition: All(vec![
            Is("schedule_consistency", "poor"),
            Any(vec![Is("shift_work", "yes"), Is("irregular_bedtime", "yes")]),
        ]),
        diagnosis: "Circadian Rhythm Disruption",
        confidence: 0.70,
        recommendations: vec![
            Recommendation::new(
                "Establish consistent sleep/wake times (even on weekends)",
                Priority::High,
            ),
            Recommendation::new("Get bright light exposure in the morning", Priority::High),
            Recommendation::new("Avoid bright light 2-3 hours before bed", Priority::Medium),
            Recommendation::new(
                "Consider light therapy if working shifts",
                Priority::Medium,
            ),
        ],
    }]
}
