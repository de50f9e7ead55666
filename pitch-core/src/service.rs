//! Session service
//!
//! The external interface over a store and an event bus. Every call takes
//! an explicit session id; there is no process-wide current session. Each
//! mutation runs as one atomic read-modify-write through the store, and
//! every successful change publishes the matching [`PitchEvent`].

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::conversation::{self, Message, MessageRole};
use crate::error::{PitchError, SessionError};
use crate::events::{EventBus, PitchEvent};
use crate::scoring::{Evaluation, MentorEvaluation};
use crate::session::lifecycle::{self, AttachOutcome, SubmitOutcome};
use crate::session::{Scenario, Session};
use crate::store::{SessionStore, StoreError};

/// Service driving the practice-session lifecycle
pub struct SessionService<S: SessionStore> {
    store: Arc<S>,
    event_bus: Arc<dyn EventBus>,
}

impl<S: SessionStore> SessionService<S> {
    pub fn new(store: Arc<S>, event_bus: Arc<dyn EventBus>) -> Self {
        Self { store, event_bus }
    }

    /// Atomic read-modify-write, reporting a missing record as a session
    /// error rather than a store error
    fn modify<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut Session) -> Result<T, PitchError>,
    ) -> Result<(Session, T), PitchError> {
        self.store
            .modify(session_id, f)
            .map_err(|error| match error {
                PitchError::Store(StoreError::NotFound(id)) => SessionError::NotFound(id).into(),
                other => other,
            })
    }

    /// Create a new session and persist it
    pub async fn start(
        &self,
        student_id: impl Into<String>,
        scenario: Scenario,
        customer_profile: Value,
    ) -> Result<Session, PitchError> {
        let session = lifecycle::start(student_id, scenario, customer_profile);
        self.store.insert(&session)?;
        info!(session_id = %session.id, student_id = %session.student_id, "Session started");
        self.event_bus
            .publish(PitchEvent::SessionStarted {
                session_id: session.id.clone(),
                student_id: session.student_id.clone(),
            })
            .await;
        Ok(session)
    }

    /// Append a message and hand it to the notification collaborator
    pub async fn append_message(
        &self,
        session_id: &str,
        role: MessageRole,
        text: impl Into<String>,
        metadata: Option<Value>,
    ) -> Result<Message, PitchError> {
        let (session, message) = self.modify(session_id, |session| {
            conversation::append_message(session, role, text, metadata).map_err(PitchError::from)
        })?;
        debug!(
            session_id,
            count = conversation::message_count(&session),
            "Message appended"
        );
        self.event_bus
            .publish(PitchEvent::MessageAppended {
                session_id: session_id.to_string(),
                message: message.clone(),
            })
            .await;
        Ok(message)
    }

    /// Submit a session for scoring; duplicate retries are no-ops
    pub async fn submit(&self, session_id: &str) -> Result<Session, PitchError> {
        let (session, outcome) = self.modify(session_id, |session| {
            lifecycle::submit(session).map_err(PitchError::from)
        })?;
        match outcome {
            SubmitOutcome::Submitted => {
                info!(session_id, "Session submitted");
                self.event_bus
                    .publish(PitchEvent::SessionSubmitted {
                        session_id: session_id.to_string(),
                    })
                    .await;
            }
            SubmitOutcome::AlreadySubmitted => {
                debug!(session_id, "Duplicate submit ignored");
            }
        }
        Ok(session)
    }

    /// Attach the AI evaluation delivered by the scoring provider
    pub async fn attach_ai_evaluation(
        &self,
        session_id: &str,
        evaluation: Evaluation,
    ) -> Result<Session, PitchError> {
        let (session, outcome) = self.modify(session_id, |session| {
            lifecycle::attach_ai_evaluation(session, evaluation).map_err(PitchError::from)
        })?;
        match outcome {
            AttachOutcome::Attached => {
                let overall_score = session
                    .ai_evaluation
                    .as_ref()
                    .and_then(|e| e.overall_score);
                info!(session_id, ?overall_score, "AI evaluation attached");
                self.event_bus
                    .publish(PitchEvent::AiEvaluationAttached {
                        session_id: session_id.to_string(),
                        overall_score,
                    })
                    .await;
            }
            AttachOutcome::AlreadyEvaluated => {
                debug!(session_id, "Duplicate AI evaluation ignored");
            }
        }
        Ok(session)
    }

    /// Attach a mentor review
    pub async fn attach_mentor_evaluation(
        &self,
        session_id: &str,
        mentor: MentorEvaluation,
    ) -> Result<Session, PitchError> {
        let (session, ()) = self.modify(session_id, |session| {
            lifecycle::attach_mentor_evaluation(session, mentor).map_err(PitchError::from)
        })?;
        let evaluated_by = session
            .mentor_evaluation
            .as_ref()
            .map(|m| m.evaluated_by.clone())
            .unwrap_or_default();
        info!(session_id, %evaluated_by, "Mentor evaluation attached");
        self.event_bus
            .publish(PitchEvent::MentorEvaluationAttached {
                session_id: session_id.to_string(),
                evaluated_by,
            })
            .await;
        Ok(session)
    }

    /// Fetch a session by id
    pub fn get_session(&self, session_id: &str) -> Result<Option<Session>, PitchError> {
        Ok(self.store.get(session_id)?)
    }

    /// All stored sessions
    pub fn list_sessions(&self) -> Result<Vec<Session>, PitchError> {
        Ok(self.store.list()?)
    }
}
