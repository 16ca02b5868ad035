pub mod loader;
pub mod sample;

pub use loader::{load_content_file, GraphContent};
pub use sample::{sample_graph, SAMPLE_START};
