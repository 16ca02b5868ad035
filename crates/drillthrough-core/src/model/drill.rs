use serde::{Deserialize, Serialize};

use super::quality::DecisionQuality;

fn default_repetitions() -> u32 {
    10
}

/// A remedial or reinforcing exercise attached to a transition or position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrillPrescription {
    pub drill_name: String,
    pub description: String,
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus_points: Vec<String>,
    /// Quality of decision this drill addresses. Should match the owning transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_quality: Option<DecisionQuality>,
}

impl DrillPrescription {
    pub fn new(drill_name: &str, description: &str) -> Self {
        Self {
            drill_name: drill_name.to_string(),
            description: description.to_string(),
            repetitions: default_repetitions(),
            focus_points: Vec::new(),
            decision_quality: None,
        }
    }

    pub fn repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn focus_points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.focus_points = points.into_iter().map(Into::into).collect();
        self
    }

    pub fn targeting(mut self, quality: DecisionQuality) -> Self {
        self.decision_quality = Some(quality);
        self
    }
}

impl std::fmt::Display for DrillPrescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} reps): {}",
            self.drill_name, self.repetitions, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drill_defaults_from_json() {
        let drill: DrillPrescription = serde_json::from_str(
            r#"{"drill_name": "Hip Escape", "description": "Shrimp the length of the mat"}"#,
        )
        .unwrap();
        assert_eq!(drill.repetitions, 10);
        assert!(drill.focus_points.is_empty());
        assert_eq!(drill.decision_quality, None);
    }

    #[test]
    fn test_drill_display() {
        let drill = DrillPrescription::new("Kimura Entry Drill", "Smooth entry to the grip")
            .repetitions(12)
            .focus_points(["Hand placement", "Quick entry"]);
        assert_eq!(
            drill.to_string(),
            "Kimura Entry Drill (12 reps): Smooth entry to the grip"
        );
        assert_eq!(drill.focus_points.len(), 2);
    }
}
