//! Property-based tests for the evaluation pass
//!
//! Verifies the engine invariants across randomized questionnaires. Uses
//! the standard library for test generation rather than external crates to
//! minimize dependencies.
//!
//! ## Invariants tested
//!
//! - Every diagnosis has a confidence, and every confidence a diagnosis
//! - Confidences stay inside [0.0, 1.0]
//! - A rule fires iff its condition holds - rules never observe each other
//! - Recommendation count equals the sum over fired rules
//! - Re-analyzing identical facts yields identical outputs
//! - Priority grouping is a stable partition of the raw recommendation list

use somna_common::{question_bank, Priority, SleepFacts};
use somna_engine::{analyze, rules};

const ITERATIONS: u64 = 250;

/// Simple pseudo-random number generator for test inputs (xorshift64)
struct TestRng {
    state: u64,
}

impl TestRng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

/// Random questionnaire: each question gets one of its canonical values,
/// and roughly one in eight is left unanswered to exercise absence.
fn random_facts(rng: &mut TestRng) -> SleepFacts {
    let mut facts = SleepFacts::new();
    for question in question_bank() {
        if rng.next_u64() % 8 == 0 {
            continue;
        }
        let values = question.canonical_values();
        facts.set(question.key, values[rng.next_index(values.len())]);
    }
    facts
}

#[test]
fn diagnoses_and_confidences_always_agree() {
    let mut rng = TestRng::new(0x5eed_0001);
    for _ in 0..ITERATIONS {
        let report = analyze(&random_facts(&mut rng));
        assert_eq!(report.diagnoses.len(), report.confidence.len());
        for diagnosis in &report.diagnoses {
            let confidence = report
                .confidence_for(diagnosis)
                .unwrap_or_else(|| panic!("no confidence for {diagnosis}"));
            assert!((0.0..=1.0).contains(&confidence));
        }
    }
}

#[test]
fn a_rule_fires_exactly_when_its_condition_holds() {
    let catalogue = rules::catalogue();
    let mut rng = TestRng::new(0x5eed_0002);
    for _ in 0..ITERATIONS {
        let facts = random_facts(&mut rng);
        let report = analyze(&facts);
        for rule in &catalogue {
            let fired = report.diagnoses.iter().any(|d| d == rule.diagnosis);
            assert_eq!(
                rule.condition.holds(&facts),
                fired,
                "rule {} fired={} disagrees with its condition",
                rule.id,
                fired
            );
        }
    }
}

#[test]
fn recommendations_come_only_from_fired_rules() {
    let catalogue = rules::catalogue();
    let mut rng = TestRng::new(0x5eed_0003);
    for _ in 0..ITERATIONS {
        let facts = random_facts(&mut rng);
        let report = analyze(&facts);
        let expected: usize = catalogue
            .iter()
            .filter(|rule| rule.condition.holds(&facts))
            .map(|rule| rule.recommendations.len())
            .sum();
        assert_eq!(report.recommendations.len(), expected);
    }
}

#[test]
fn reanalysis_of_identical_facts_is_stable() {
    let mut rng = TestRng::new(0x5eed_0004);
    for _ in 0..ITERATIONS {
        let facts = random_facts(&mut rng);
        let first = analyze(&facts);
        let second = analyze(&facts);
        assert_eq!(first.diagnoses, second.diagnoses);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.recommendations, second.recommendations);
    }
}

#[test]
fn priority_grouping_is_a_stable_partition() {
    let mut rng = TestRng::new(0x5eed_0005);
    for _ in 0..ITERATIONS {
        let report = analyze(&random_facts(&mut rng));
        let grouped = report.recommendations_by_priority();

        // Priorities strictly descending across groups.
        let priorities: Vec<Priority> = grouped.iter().map(|(p, _)| *p).collect();
        let mut sorted = priorities.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        sorted.dedup();
        assert_eq!(priorities, sorted);

        // Each group preserves the raw order and nothing is lost.
        let mut regrouped = 0;
        for (priority, group) in &grouped {
            let expected: Vec<&str> = report
                .recommendations
                .iter()
                .filter(|rec| rec.priority == *priority)
                .map(|rec| rec.text.as_str())
                .collect();
            let actual: Vec<&str> = group.iter().map(|rec| rec.text.as_str()).collect();
            assert_eq!(actual, expected);
            regrouped += group.len();
        }
        assert_eq!(regrouped, report.recommendations.len());
    }
}
