//! Onset and maintenance insomnia rules

use super::Rule;
use crate::condition::Condition::{All, Is};
use somna_common::{Priority, Recommendation};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "caffeine-onset-insomnia",
            condition: All(vec![
                Is("sleep_onset", "long"),
                Is("caffeine_timing", "late"),
            ]),
            diagnosis: "Caffeine-Related Onset Insomnia",
            confidence: 0.75,
            recommendations: vec![
                Recommendation::new("Avoid caffeine after 2 PM", Priority::High),
                Recommendation::new(
                    "Switch to decaf or herbal tea in afternoon/evening",
                    Priority::Medium,
                ),
            ],
        },
        Rule {
            id: "blue-light-onset-insomnia",
            condition: All(vec![Is("sleep_onset", "long"), Is("screen_time", "high")]),
            diagnosis: "Blue Light-Related Onset Insomnia",
            confidence: 0.70,
            recommendations: vec![
                Recommendation::new("Limit screen time 1-2 hours before bed", Priority::High),
                Recommendation::new(
                    "Use blue light filters or night mode on devices",
                    Priority::Medium,
                ),
                Recommendation::new("Try reading a physical book instead", Priority::Low),
            ],
        },
        Rule {
            id: "stress-maintenance-insomnia",
            condition: All(vec![
                Is("night_awakenings", "frequent"),
                Is("racing_thoughts", "yes"),
                Is("stress_level", "high"),
            ]),
            diagnosis: "Stress-Related Maintenance Insomnia",
            confidence: 0.80,
            recommendations: vec![
                Recommendation::new(
                    "Practice relaxation techniques (deep breathing, meditation)",
                    Priority::High,
                ),
                Recommendation::new(
                    "Consider cognitive behavioral therapy for insomnia (CBT-I)",
                    Priority::High,
                ),
                Recommendation::new(
                    "Keep a worry journal - write down concerns before bed",
                    Priority::Medium,
                ),
                Recommendation::new("Try progressive muscle relaxation", Priority::Low),
            ],
        },
        Rule {
            id: "alcohol-disrupted-sleep",
            condition: All(vec![
                Is("night_awakenings", "frequent"),
                Is("alcohol_consumption", "yes"),
            ]),
            diagnosis: "Alcohol-Disrupted Sleep",
            confidence: 0.75,
            recommendations: vec![
                Recommendation::new("Avoid alcohol 3-4 hours before bedtime", Priority::High),
                Recommendation::new(
                    "Alcohol disrupts REM sleep and causes frequent awakenings",
                    Priority::Medium,
                ),
            ],
        },
    ]
}
