use crate::error::GraphError;
use crate::graph::DrillGraph;

/// Where the built-in narrative begins.
pub const SAMPLE_START: &str = "closed_guard";

const SAMPLE_JSON: &str = include_str!("../../data/sample_graph.json");

/// The built-in closed guard to mount chain.
pub fn sample_graph() -> Result<DrillGraph, GraphError> {
    DrillGraph::from_json(SAMPLE_JSON)
}
