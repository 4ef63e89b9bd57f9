//! Analysis report - the accumulated result of one evaluation pass
//!
//! A fresh report is built per analysis call and returned by value; nothing
//! is shared between runs. The three collections mirror what the rules
//! produce: diagnosis labels in firing order, a label -> confidence map, and
//! recommendations in firing order.

use crate::types::{Priority, Recommendation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,

    /// Diagnosis labels in rule-firing order
    pub diagnoses: Vec<String>,

    /// Confidence in [0,1] per diagnosis label.
    /// When two rules ever share a label, the later-firing rule's confidence
    /// wins - the catalogue currently has no such pair.
    pub confidence: BTreeMap<String, f64>,

    /// Recommendations in rule-firing order, duplicates preserved
    pub recommendations: Vec<Recommendation>,
}

impl SleepReport {
    pub fn new() -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            diagnoses: Vec::new(),
            confidence: BTreeMap::new(),
            recommendations: Vec::new(),
        }
    }

    /// Record a fired diagnosis with its confidence
    pub fn add_diagnosis(&mut self, label: impl Into<String>, confidence: f64) {
        let label = label.into();
        self.diagnoses.push(label.clone());
        self.confidence.insert(label, confidence);
    }

    pub fn extend_recommendations<I>(&mut self, recs: I)
    where
        I: IntoIterator<Item = Recommendation>,
    {
        self.recommendations.extend(recs);
    }

    /// True when no rule fired
    pub fn is_clear(&self) -> bool {
        self.diagnoses.is_empty()
    }

    pub fn confidence_for(&self, label: &str) -> Option<f64> {
        self.confidence.get(label).copied()
    }

    /// Recommendations grouped by priority, highest first, preserving the
    /// original order within each group
    pub fn recommendations_by_priority(&self) -> Vec<(Priority, Vec<&Recommendation>)> {
        Priority::descending()
            .into_iter()
            .map(|priority| {
                let group: Vec<&Recommendation> = self
                    .recommendations
                    .iter()
                    .filter(|rec| rec.priority == priority)
                    .collect();
                (priority, group)
            })
            .filter(|(_, group)| !group.is_empty())
            .collect()
    }
}

impl Default for SleepReport {
    fn default() -> Self {
        Self::new()
    }
}
