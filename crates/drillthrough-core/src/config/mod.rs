pub mod settings;

pub use settings::{DrillConfig, CONFIG_FILE_NAME};
