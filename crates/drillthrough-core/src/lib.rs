//! Position graph and domain model for Drillthrough.
//!
//! A [`DrillGraph`] holds positions and the probability-weighted transitions
//! between them. Content is registered through [`DrillGraph::add_position`]
//! and [`DrillGraph::add_transition`], either directly or via the JSON
//! [`content`] loader.

pub mod config;
pub mod content;
pub mod error;
pub mod graph;
pub mod model;

pub use config::DrillConfig;
pub use content::{load_content_file, sample_graph, GraphContent};
pub use error::GraphError;
pub use graph::DrillGraph;
pub use model::{DecisionQuality, DrillPrescription, Position, Transition};
