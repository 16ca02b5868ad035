use drillthrough_core::error::GraphError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid choice {index}: {available} choice(s) available")]
    InvalidChoice { index: usize, available: usize },

    #[error("No choices available from position {position}")]
    NoChoicesAvailable { position: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

impl SessionError {
    /// Errors the driver should answer with a re-prompt rather than abort.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidChoice { .. } | SessionError::NoChoicesAvailable { .. }
        )
    }
}
