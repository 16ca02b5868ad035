pub mod drill;
pub mod position;
pub mod quality;
pub mod transition;

pub use drill::DrillPrescription;
pub use position::Position;
pub use quality::DecisionQuality;
pub use transition::Transition;
