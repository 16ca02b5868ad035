use serde::{Deserialize, Serialize};

use super::drill::DrillPrescription;
use super::quality::DecisionQuality;

/// A directed, probability-weighted edge between two positions.
///
/// `probability` is the estimated success likelihood of `action` on its own.
/// Sibling transitions describe independent scenarios, so their probabilities
/// do not have to sum to one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transition {
    pub from_position: String,
    pub to_position: String,
    pub action: String,
    pub opponent_reaction: String,
    pub probability: f64,
    pub decision_quality: DecisionQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drill_prescription: Option<DrillPrescription>,
}

impl Transition {
    pub fn new(
        from_position: &str,
        to_position: &str,
        action: &str,
        opponent_reaction: &str,
        probability: f64,
        decision_quality: DecisionQuality,
    ) -> Self {
        Self {
            from_position: from_position.to_string(),
            to_position: to_position.to_string(),
            action: action.to_string(),
            opponent_reaction: opponent_reaction.to_string(),
            probability,
            decision_quality,
            drill_prescription: None,
        }
    }

    pub fn with_drill(mut self, drill: DrillPrescription) -> Self {
        self.drill_prescription = Some(drill);
        self
    }

    pub fn has_valid_probability(&self) -> bool {
        self.probability.is_finite() && self.probability > 0.0 && self.probability <= 1.0
    }

    /// False when the attached drill targets a different decision quality.
    pub fn drill_matches_quality(&self) -> bool {
        match self
            .drill_prescription
            .as_ref()
            .and_then(|d| d.decision_quality)
        {
            Some(q) => q == self.decision_quality,
            None => true,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from_position == self.to_position
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({:.0}%)",
            self.action,
            self.opponent_reaction,
            self.probability * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_creation() {
        let t = Transition::new(
            "pos1",
            "pos2",
            "Do something",
            "React somehow",
            0.7,
            DecisionQuality::Good,
        );
        assert_eq!(t.from_position, "pos1");
        assert_eq!(t.probability, 0.7);
        assert_eq!(t.decision_quality, DecisionQuality::Good);
        assert!(t.drill_prescription.is_none());
        assert_eq!(t.to_string(), "Do something -> React somehow (70%)");
    }

    #[test]
    fn test_probability_bounds() {
        let make = |p| Transition::new("a", "b", "x", "y", p, DecisionQuality::Poor);
        assert!(make(1.0).has_valid_probability());
        assert!(make(0.01).has_valid_probability());
        assert!(!make(0.0).has_valid_probability());
        assert!(!make(1.2).has_valid_probability());
        assert!(!make(-0.5).has_valid_probability());
        assert!(!make(f64::NAN).has_valid_probability());
    }

    #[test]
    fn test_drill_quality_consistency() {
        let t = Transition::new("a", "b", "x", "y", 0.5, DecisionQuality::Excellent);
        assert!(t.drill_matches_quality());

        let matching = t
            .clone()
            .with_drill(DrillPrescription::new("d", "desc").targeting(DecisionQuality::Excellent));
        assert!(matching.drill_matches_quality());

        let mismatched =
            t.with_drill(DrillPrescription::new("d", "desc").targeting(DecisionQuality::Failure));
        assert!(!mismatched.drill_matches_quality());
    }
}
