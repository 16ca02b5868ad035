pub mod dot;
pub mod engine;

pub use engine::DrillGraph;
