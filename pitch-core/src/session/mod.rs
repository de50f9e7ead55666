//! Session domain module
//!
//! The `Session` record, its lifecycle state machine, and the derived
//! practice duration.

pub mod duration;
pub mod lifecycle;
mod types;

pub use lifecycle::{AttachOutcome, SubmitOutcome};
pub use types::{AiEvaluationStatus, Scenario, Session, SessionStatus};
