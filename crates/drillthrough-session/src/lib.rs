//! Narrative session over a Drillthrough position graph.
//!
//! # Example
//! ```
//! use drillthrough_core::{sample_graph, content::SAMPLE_START};
//! use drillthrough_session::{NarrativeSession, SessionState};
//!
//! let graph = sample_graph().unwrap();
//! let mut session = NarrativeSession::start(&graph, SAMPLE_START).unwrap();
//! let taken = session.choose(0).unwrap();
//! println!("{}", taken.opponent_reaction);
//! assert_eq!(session.history().len(), 1);
//! assert_eq!(session.state(), SessionState::Active);
//! ```

pub mod error;
mod session;
mod summary;

pub use error::SessionError;
pub use session::{HistoryEntry, NarrativeSession, SessionId, SessionState};
pub use summary::SessionSummary;

// Re-export core types that session users need
pub use drillthrough_core::model::{DecisionQuality, DrillPrescription, Position, Transition};
pub use drillthrough_core::DrillGraph;
