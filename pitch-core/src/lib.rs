//! pitch-core: practice-session evaluation lifecycle
//!
//! This crate provides the engineering core of the sales-practice trainer:
//!
//! - **Session state machine** - [`session::lifecycle`] drives
//!   `in_progress -> submitted -> evaluated` with idempotent retries
//! - **Score aggregation** - [`scoring`] validates AI evaluation payloads
//!   and reduces mentor rubric scores into dimension averages
//! - **Conversation log** - [`conversation`] appends messages with
//!   server-assigned, non-decreasing timestamps
//! - **Status reconciliation** - [`StatusReconciler`] back-fills the
//!   derived `ai_evaluation_status` field on legacy records
//! - **Event system** - [`EventBus`] trait and [`MemoryEventBus`] for
//!   real-time notification of session mutations
//!
//! Persistence is a collaborator, not a concern of this crate: the
//! [`SessionStore`] trait assumes per-record atomicity and nothing more.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use pitch_core::{MemoryEventBus, MemoryStore, MessageRole, Scenario, SessionService};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), pitch_core::PitchError> {
//! let store = Arc::new(MemoryStore::new());
//! let bus = Arc::new(MemoryEventBus::new(100));
//! let service = SessionService::new(store, bus);
//!
//! let session = service
//!     .start(
//!         "student-1",
//!         Scenario::Template("cold-call".to_string()),
//!         json!({"persona": "Skeptical CTO"}),
//!     )
//!     .await?;
//! service
//!     .append_message(&session.id, MessageRole::Student, "Hi!", None)
//!     .await?;
//! service.submit(&session.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod conversation;
pub mod error;
pub mod events;
pub mod reconcile;
pub mod scoring;
pub mod service;
pub mod session;
pub mod store;

// Re-export key types for convenience
pub use conversation::{MAX_MESSAGE_LEN, Message, MessageRole};
pub use error::{ConversationError, EvaluationError, PitchError, SessionError};
pub use events::{EventBus, MemoryEventBus, PitchEvent};
pub use reconcile::{ReconcileReport, StatusReconciler};
pub use scoring::{
    CRITERION_COUNT, CriterionDetail, CriterionScore, Dimension, DimensionAverages,
    DimensionScore, Evaluation, MentorEvaluation,
};
pub use service::SessionService;
pub use session::{
    AiEvaluationStatus, AttachOutcome, Scenario, Session, SessionStatus, SubmitOutcome,
};
pub use store::{JsonFileStore, MemoryStore, SessionStore, StoreError};
