use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Position already registered: {id}")]
    DuplicateId { id: String },

    #[error("Transition references unknown position: {id}")]
    UnknownPosition { id: String },

    #[error("Position not found: {id}")]
    PositionNotFound { id: String },

    #[error("Invalid probability {probability} for transition {from} -> {to} (must be in (0, 1])")]
    InvalidProbability {
        from: String,
        to: String,
        probability: f64,
    },

    #[error("Invalid content: {0}")]
    Content(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl GraphError {
    pub(crate) fn not_found(id: &str) -> Self {
        GraphError::PositionNotFound { id: id.to_string() }
    }
}
