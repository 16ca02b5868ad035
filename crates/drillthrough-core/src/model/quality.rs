use serde::{Deserialize, Serialize};

/// Rating of how good a chosen transition was, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionQuality {
    Excellent,
    Good,
    Poor,
    Failure,
}

impl DecisionQuality {
    pub const ALL: [DecisionQuality; 4] = [
        DecisionQuality::Excellent,
        DecisionQuality::Good,
        DecisionQuality::Poor,
        DecisionQuality::Failure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionQuality::Excellent => "excellent",
            DecisionQuality::Good => "good",
            DecisionQuality::Poor => "poor",
            DecisionQuality::Failure => "failure",
        }
    }

    /// Excellent and good decisions count as positive outcomes.
    pub fn is_positive(&self) -> bool {
        matches!(self, DecisionQuality::Excellent | DecisionQuality::Good)
    }
}

impl std::fmt::Display for DecisionQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}
