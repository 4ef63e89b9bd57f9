//! Restless leg syndrome screening

use super::Rule;
use crate::condition::Condition::{All, Is};
use somna_common::{Priority, Recommendation};

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule {
        id: "restless-legs",
        condition: All(vec![
            Is("leg_discomfort", "yes"),
            Is("urge_to_move", "yes"),
        ]),
        diagnosis: "Possible Restless Leg Syndrome",
        confidence: 0.80,
        recommendations: vec![
            Recommendation::new("Consult a physician for proper diagnosis", Priority::High),
            Recommendation::new("Check iron and magnesium levels", Priority::High),
            Recommendation::new(
                "Try leg massages or stretching before bed",
                Priority::Medium,
            ),
            Recommendation::new(
                "Avoid caffeine which can worsen symptoms",
                Priority::Medium,
            ),
        ],
    }]
}
