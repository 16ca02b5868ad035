use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::DrillGraph;
use crate::model::{Position, Transition};

/// Authoring format for a position graph, stored as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphContent {
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl GraphContent {
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&DrillGraph> for GraphContent {
    fn from(graph: &DrillGraph) -> Self {
        Self {
            positions: graph.positions().cloned().collect(),
            transitions: graph.transitions().cloned().collect(),
        }
    }
}

impl DrillGraph {
    /// Build a graph by registering every position, then every transition.
    ///
    /// A drill prescription without an explicit decision quality targets the
    /// quality of the transition carrying it.
    pub fn from_content(content: GraphContent) -> Result<Self, GraphError> {
        let mut graph = DrillGraph::new();
        for position in content.positions {
            graph.add_position(position)?;
        }
        for mut transition in content.transitions {
            if let Some(drill) = transition.drill_prescription.as_mut() {
                drill
                    .decision_quality
                    .get_or_insert(transition.decision_quality);
            }
            graph.add_transition(transition)?;
        }
        Ok(graph)
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Self::from_content(GraphContent::from_json(json)?)
    }
}

/// Read and register a JSON content file.
pub fn load_content_file(path: &Path) -> Result<DrillGraph, GraphError> {
    let json = std::fs::read_to_string(path)?;
    let graph = DrillGraph::from_json(&json)?;
    tracing::info!(
        "Loaded {} positions and {} transitions from {}",
        graph.position_count(),
        graph.transition_count(),
        path.display()
    );
    Ok(graph)
}
