use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drillthrough_core::error::GraphError;
use drillthrough_core::model::{Position, Transition};
use drillthrough_core::DrillGraph;

use crate::error::SessionError;
use crate::summary::SessionSummary;

/// Identifier for one walk through the graph. UUID v4 hex, no dashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// The current position has at least one outgoing transition.
    Active,
    /// Nothing left to choose; the walk cannot continue.
    Terminal,
}

/// One applied choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub from_position_id: String,
    pub transition_taken: Transition,
    pub to_position_id: String,
    pub taken_at: DateTime<Utc>,
}

/// A walk through a [`DrillGraph`], one transition at a time.
///
/// The session borrows the graph, so the graph cannot change underneath it.
/// History is append-only and lives only as long as the session.
#[derive(Debug)]
pub struct NarrativeSession<'g> {
    graph: &'g DrillGraph,
    id: SessionId,
    started_at: DateTime<Utc>,
    start_position_id: String,
    current_position_id: String,
    history: Vec<HistoryEntry>,
}

impl<'g> NarrativeSession<'g> {
    /// Begin a session at `start_position_id`.
    pub fn start(graph: &'g DrillGraph, start_position_id: &str) -> Result<Self, SessionError> {
        graph.get_position(start_position_id)?;
        let session = Self {
            graph,
            id: SessionId::new(),
            started_at: Utc::now(),
            start_position_id: start_position_id.to_string(),
            current_position_id: start_position_id.to_string(),
            history: Vec::new(),
        };
        tracing::debug!(
            "Session {} started at {} ({:?})",
            session.id,
            start_position_id,
            session.state()
        );
        Ok(session)
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn graph(&self) -> &'g DrillGraph {
        self.graph
    }

    pub fn start_position_id(&self) -> &str {
        &self.start_position_id
    }

    pub fn current_position_id(&self) -> &str {
        &self.current_position_id
    }

    pub fn current_position(&self) -> Result<&'g Position, SessionError> {
        Ok(self.graph.get_position(&self.current_position_id)?)
    }

    /// Outgoing transitions from the current position, in the graph's order.
    /// Empty when the session is terminal.
    pub fn available_choices(&self) -> &'g [Transition] {
        self.graph
            .get_transitions_from(&self.current_position_id)
            .unwrap_or(&[])
    }

    pub fn state(&self) -> SessionState {
        if self.available_choices().is_empty() {
            SessionState::Terminal
        } else {
            SessionState::Active
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state() == SessionState::Terminal
    }

    /// Apply the zero-based `index` into [`available_choices`](Self::available_choices).
    ///
    /// On error the current position and history are left untouched.
    pub fn choose(&mut self, index: usize) -> Result<&'g Transition, SessionError> {
        let choices = self.available_choices();
        if choices.is_empty() {
            return Err(SessionError::NoChoicesAvailable {
                position: self.current_position_id.clone(),
            });
        }
        let transition = choices.get(index).ok_or(SessionError::InvalidChoice {
            index,
            available: choices.len(),
        })?;
        if !self.graph.has_position(&transition.to_position) {
            return Err(GraphError::PositionNotFound {
                id: transition.to_position.clone(),
            }
            .into());
        }

        self.history.push(HistoryEntry {
            from_position_id: self.current_position_id.clone(),
            transition_taken: transition.clone(),
            to_position_id: transition.to_position.clone(),
            taken_at: Utc::now(),
        });
        tracing::debug!(
            "Session {}: {} -> {} via \"{}\" ({})",
            self.id,
            self.current_position_id,
            transition.to_position,
            transition.action,
            transition.decision_quality
        );
        self.current_position_id = transition.to_position.clone();
        Ok(transition)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Start over at `start_position_id`, discarding history.
    /// An unknown id leaves the session as it was.
    pub fn reset(&mut self, start_position_id: &str) -> Result<(), SessionError> {
        self.graph.get_position(start_position_id)?;
        self.start_position_id = start_position_id.to_string();
        self.current_position_id = start_position_id.to_string();
        self.history.clear();
        self.started_at = Utc::now();
        tracing::debug!("Session {} reset to {}", self.id, start_position_id);
        Ok(())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_session(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drillthrough_core::model::{DecisionQuality, DrillPrescription};

    fn guard_graph() -> DrillGraph {
        let mut graph = DrillGraph::new();
        graph
            .add_position(
                Position::new("closed_guard", "Closed Guard", "Legs locked around the waist")
                    .advantages(["Control posture"])
                    .common_mistakes(["Flat back"]),
            )
            .unwrap();
        graph
            .add_position(Position::new(
                "broken_posture",
                "Broken Posture",
                "Opponent's chest is down",
            ))
            .unwrap();
        graph
            .add_transition(
                Transition::new(
                    "closed_guard",
                    "broken_posture",
                    "Pull down on the head while extending hips",
                    "Posture breaks forward",
                    0.7,
                    DecisionQuality::Good,
                )
                .with_drill(
                    DrillPrescription::new("Posture Breaks", "Rapid fire posture breaks")
                        .targeting(DecisionQuality::Good),
                ),
            )
            .unwrap();
        graph
    }

    #[test]
    fn test_start_unknown_position() {
        let graph = guard_graph();
        let err = NarrativeSession::start(&graph, "half_guard").unwrap_err();
        assert!(matches!(
            err,
            SessionError::Graph(GraphError::PositionNotFound { ref id }) if id == "half_guard"
        ));
    }

    #[test]
    fn test_walk_to_terminal() {
        let graph = guard_graph();
        let mut session = NarrativeSession::start(&graph, "closed_guard").unwrap();
        assert_eq!(session.state(), SessionState::Active);
        assert!(session.history().is_empty());
        assert_eq!(session.available_choices().len(), 1);

        let taken = session.choose(0).unwrap();
        assert_eq!(taken.to_position, "broken_posture");
        assert_eq!(taken.probability, 0.7);
        assert_eq!(taken.decision_quality, DecisionQuality::Good);

        assert_eq!(session.current_position().unwrap().id, "broken_posture");
        assert_eq!(session.state(), SessionState::Terminal);
        assert_eq!(session.history().len(), 1);

        let entry = &session.history()[0];
        assert_eq!(entry.from_position_id, "closed_guard");
        assert_eq!(entry.to_position_id, "broken_posture");
        assert_eq!(&entry.transition_taken, taken);
    }

    #[test]
    fn test_out_of_range_choice_leaves_state() {
        let graph = guard_graph();
        let mut session = NarrativeSession::start(&graph, "closed_guard").unwrap();

        let err = session.choose(1).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidChoice {
                index: 1,
                available: 1
            }
        ));
        assert!(err.is_user_correctable());
        assert_eq!(session.current_position_id(), "closed_guard");
        assert!(session.history().is_empty());
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_terminal_start() {
        let graph = guard_graph();
        let mut session = NarrativeSession::start(&graph, "broken_posture").unwrap();
        assert!(session.is_terminal());
        assert!(session.available_choices().is_empty());

        let err = session.choose(0).unwrap_err();
        assert!(matches!(
            err,
            SessionError::NoChoicesAvailable { ref position } if position == "broken_posture"
        ));
        assert!(session.history().is_empty());

        // an empty choice list wins over a bad index
        let err = session.choose(5).unwrap_err();
        assert!(matches!(
            err,
            SessionError::NoChoicesAvailable { ref position } if position == "broken_posture"
        ));
        assert_eq!(session.current_position_id(), "broken_posture");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_self_loop_revisits_position() {
        let mut graph = guard_graph();
        graph
            .add_transition(Transition::new(
                "closed_guard",
                "closed_guard",
                "Weak posture break attempt",
                "Opponent maintains posture",
                0.3,
                DecisionQuality::Poor,
            ))
            .unwrap();

        let mut session = NarrativeSession::start(&graph, "closed_guard").unwrap();
        session.choose(1).unwrap();
        session.choose(1).unwrap();
        assert_eq!(session.current_position_id(), "closed_guard");
        assert_eq!(session.history().len(), 2);
        session.choose(0).unwrap();
        assert!(session.is_terminal());
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_reset() {
        let graph = guard_graph();
        let mut session = NarrativeSession::start(&graph, "closed_guard").unwrap();
        session.choose(0).unwrap();

        assert!(session.reset("nowhere").is_err());
        assert_eq!(session.current_position_id(), "broken_posture");
        assert_eq!(session.history().len(), 1);

        session.reset("closed_guard").unwrap();
        assert_eq!(session.current_position_id(), "closed_guard");
        assert!(session.history().is_empty());
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_session_id() {
        let id = SessionId::new();
        assert_eq!(id.as_str().len(), 32);
        assert_ne!(id, SessionId::new());
    }
}
