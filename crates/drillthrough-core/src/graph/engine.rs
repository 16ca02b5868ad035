use std::collections::HashMap;

use crate::error::GraphError;
use crate::model::{DrillPrescription, Position, Transition};

/// In-memory index of positions and their outgoing transitions.
///
/// Transitions are kept per source position in insertion order, which is the
/// order choices are numbered in. Cycles and self-loops are allowed.
#[derive(Debug, Clone, Default)]
pub struct DrillGraph {
    positions: HashMap<String, Position>,
    /// Position ids in registration order.
    order: Vec<String>,
    outgoing: HashMap<String, Vec<Transition>>,
    transition_count: usize,
}

impl DrillGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a position. Duplicate ids are rejected.
    pub fn add_position(&mut self, position: Position) -> Result<(), GraphError> {
        if self.positions.contains_key(&position.id) {
            return Err(GraphError::DuplicateId { id: position.id });
        }
        tracing::debug!("Registered position {}", position.id);
        self.order.push(position.id.clone());
        self.positions.insert(position.id.clone(), position);
        Ok(())
    }

    /// Register a transition after checking both endpoints and its probability.
    /// Nothing is recorded when validation fails.
    pub fn add_transition(&mut self, transition: Transition) -> Result<(), GraphError> {
        for id in [&transition.from_position, &transition.to_position] {
            if !self.positions.contains_key(id) {
                return Err(GraphError::UnknownPosition { id: id.clone() });
            }
        }
        if !transition.has_valid_probability() {
            return Err(GraphError::InvalidProbability {
                from: transition.from_position,
                to: transition.to_position,
                probability: transition.probability,
            });
        }
        if !transition.drill_matches_quality() {
            tracing::warn!(
                "Drill for {} -> {} targets a different decision quality than {}",
                transition.from_position,
                transition.to_position,
                transition.decision_quality
            );
        }

        tracing::debug!(
            "Registered transition {} -> {}",
            transition.from_position,
            transition.to_position
        );
        self.outgoing
            .entry(transition.from_position.clone())
            .or_default()
            .push(transition);
        self.transition_count += 1;
        Ok(())
    }

    pub fn get_position(&self, id: &str) -> Result<&Position, GraphError> {
        self.positions.get(id).ok_or_else(|| GraphError::not_found(id))
    }

    /// Outgoing transitions in insertion order. Empty for terminal positions.
    pub fn get_transitions_from(&self, id: &str) -> Result<&[Transition], GraphError> {
        if !self.positions.contains_key(id) {
            return Err(GraphError::not_found(id));
        }
        Ok(self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[]))
    }

    pub fn has_position(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transition_count
    }

    /// Positions in registration order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.order.iter().filter_map(|id| self.positions.get(id))
    }

    /// Every transition, grouped by source in registration order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.order
            .iter()
            .filter_map(|id| self.outgoing.get(id))
            .flatten()
    }

    pub fn is_terminal(&self, id: &str) -> Result<bool, GraphError> {
        Ok(self.get_transitions_from(id)?.is_empty())
    }

    /// Positions with no outgoing transitions, in registration order.
    pub fn terminal_positions(&self) -> impl Iterator<Item = &Position> {
        self.positions()
            .filter(|p| self.is_terminal(&p.id).unwrap_or(true))
    }

    pub fn drill_for_transition<'a>(
        &self,
        transition: &'a Transition,
    ) -> Option<&'a DrillPrescription> {
        transition.drill_prescription.as_ref()
    }

    pub fn position_drills(&self, id: &str) -> Result<&[DrillPrescription], GraphError> {
        Ok(&self.get_position(id)?.default_drills)
    }
}
