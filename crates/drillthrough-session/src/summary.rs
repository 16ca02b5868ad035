use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use drillthrough_core::model::{DecisionQuality, DrillPrescription};

use crate::session::{NarrativeSession, SessionId, SessionState};

/// What a session covered: positions, actions and the drills it earned.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub started_at: DateTime<Utc>,
    pub start_position_id: String,
    pub current_position_id: String,
    pub state: SessionState,
    /// The start position plus one per applied choice, revisits included.
    pub positions_visited: usize,
    pub actions_taken: Vec<String>,
    pub drills_earned: Vec<DrillPrescription>,
    pub quality_counts: BTreeMap<DecisionQuality, usize>,
}

impl SessionSummary {
    pub(crate) fn from_session(session: &NarrativeSession<'_>) -> Self {
        let history = session.history();
        let mut quality_counts = BTreeMap::new();
        for entry in history {
            *quality_counts
                .entry(entry.transition_taken.decision_quality)
                .or_insert(0) += 1;
        }

        Self {
            session_id: session.id().clone(),
            started_at: session.started_at(),
            start_position_id: session.start_position_id().to_string(),
            current_position_id: session.current_position_id().to_string(),
            state: session.state(),
            positions_visited: history.len() + 1,
            actions_taken: history
                .iter()
                .map(|e| e.transition_taken.action.clone())
                .collect(),
            drills_earned: history
                .iter()
                .filter_map(|e| e.transition_taken.drill_prescription.clone())
                .collect(),
            quality_counts,
        }
    }

    pub fn total_drills(&self) -> usize {
        self.drills_earned.len()
    }

    /// Share of choices rated excellent or good, `None` before any choice.
    pub fn positive_ratio(&self) -> Option<f64> {
        let total: usize = self.quality_counts.values().sum();
        if total == 0 {
            return None;
        }
        let positive: usize = self
            .quality_counts
            .iter()
            .filter(|(q, _)| q.is_positive())
            .map(|(_, n)| n)
            .sum();
        Some(positive as f64 / total as f64)
    }

    pub fn total_repetitions(&self) -> u32 {
        self.drills_earned.iter().map(|d| d.repetitions).sum()
    }
}
