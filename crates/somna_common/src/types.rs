//! Core data types for the Somna advisor

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority level for recommendations
///
/// Ordered so that `High > Medium > Low`; serialized as the lowercase
/// literals the answers/report formats use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act on these first
    High = 2,
    /// Significant improvements
    Medium = 1,
    /// Nice-to-have adjustments
    Low = 0,
}

impl Priority {
    /// All priorities, highest first - the presentation order
    pub fn descending() -> [Priority; 3] {
        [Priority::High, Priority::Medium, Priority::Low]
    }

    /// The lowercase wire literal
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single advisory produced by a fired rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Self {
            text: text.into(),
            priority,
        }
    }
}
