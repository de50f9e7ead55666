//! Session persistence interface
//!
//! The core assumes atomic read-modify-write per record and nothing more;
//! cross-record transactions are deliberately absent.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::session::{AiEvaluationStatus, Session};

/// Errors from session stores
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence collaborator for session records
pub trait SessionStore: Send + Sync {
    /// Insert a newly created session
    fn insert(&self, session: &Session) -> Result<(), StoreError>;

    /// Fetch a session by id
    fn get(&self, id: &str) -> Result<Option<Session>, StoreError>;

    /// Replace an existing session record
    fn update(&self, session: &Session) -> Result<(), StoreError>;

    /// Atomic read-modify-write of one record.
    ///
    /// The closure runs while the record is exclusively held, so two
    /// concurrent mutations of the same session cannot interleave between
    /// the read and the write. An error from the closure leaves the stored
    /// record unchanged; on success the mutated record is committed and
    /// returned together with the closure's value.
    fn modify<T, E, F>(&self, id: &str, f: F) -> Result<(Session, T), E>
    where
        F: FnOnce(&mut Session) -> Result<T, E>,
        E: From<StoreError>;

    /// All stored sessions
    fn list(&self) -> Result<Vec<Session>, StoreError>;

    /// Targeted single-field update used by the reconciler.
    ///
    /// Writes `status` only when `ai_evaluation_status` is currently absent
    /// and returns whether a write happened. A concurrent live write that
    /// set the field first wins.
    fn set_ai_evaluation_status_if_absent(
        &self,
        id: &str,
        status: AiEvaluationStatus,
    ) -> Result<bool, StoreError>;
}
