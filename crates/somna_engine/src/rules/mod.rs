//! Rule catalogue
//!
//! The fixed rule table, declared as data and grouped by category. Category
//! modules each build their rules as literals; [`catalogue`] concatenates
//! them in evaluation order. Rules are independent: none reads another's
//! output, and firing order only determines the order of the accumulated
//! diagnoses and recommendations.

mod apnea;
mod baseline;
mod circadian;
mod environment;
mod hygiene;
mod insomnia;
mod restless_legs;
mod wellbeing;

use crate::condition::Condition;
use somna_common::Recommendation;

/// A named predicate with its fixed consequence
#[derive(Debug, Clone)]
pub struct Rule {
    /// Stable identifier, e.g. `apnea-high-risk`
    pub id: &'static str,
    pub condition: Condition,
    pub diagnosis: &'static str,
    /// Static confidence in [0,1] attached to the diagnosis
    pub confidence: f64,
    /// Appended in this order when the rule fires
    pub recommendations: Vec<Recommendation>,
}

/// The full catalogue in evaluation order
pub fn catalogue() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(apnea::rules());
    rules.extend(insomnia::rules());
    rules.extend(circadian::rules());
    rules.extend(restless_legs::rules());
    rules.extend(environment::rules());
    rules.extend(hygiene::rules());
    rules.extend(wellbeing::rules());
    rules.extend(baseline::rules());
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogue_has_the_expected_rules_in_order() {
        let ids: Vec<&str> = catalogue().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "apnea-high-risk",
                "apnea-moderate-risk",
                "caffeine-onset-insomnia",
                "blue-light-onset-insomnia",
                "stress-maintenance-insomnia",
                "alcohol-disrupted-sleep",
                "circadian-disruption",
                "restless-legs",
                "temperature-issue",
                "light-pollution",
                "noise-disruption",
                "bedroom-association",
                "late-exercise",
                "late-meals",
                "excessive-napping",
                "sleep-deprivation",
                "anxiety-disturbance",
                "healthy-pattern",
                "insufficient-information",
            ]
        );
    }

    #[test]
    fn ids_and_diagnoses_are_unique() {
        let rules = catalogue();
        let ids: HashSet<&str> = rules.iter().map(|r| r.id).collect();
        let labels: HashSet<&str> = rules.iter().map(|r| r.diagnosis).collect();
        assert_eq!(ids.len(), rules.len());
        assert_eq!(labels.len(), rules.len());
    }

    #[test]
    fn confidences_stay_in_range() {
        for rule in catalogue() {
            assert!(
                (0.0..=1.0).contains(&rule.confidence),
                "{} has confidence {}",
                rule.id,
                rule.confidence
            );
        }
    }

    #[test]
    fn every_rule_carries_recommendations() {
        for rule in catalogue() {
            assert!(!rule.recommendations.is_empty(), "{} has no advice", rule.id);
        }
    }
}
