//! In-memory session store

use std::collections::HashMap;
use std::sync::Mutex;

use crate::session::{AiEvaluationStatus, Session};

use super::{SessionStore, StoreError};

/// HashMap-backed store for tests and in-process embedding
#[derive(Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn insert(&self, session: &Session) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Session>, StoreError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions.get(id).cloned())
    }

    fn update(&self, session: &Session) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get_mut(&session.id) {
            Some(slot) => {
                *slot = session.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(session.id.clone())),
        }
    }

    fn modify<T, E, F>(&self, id: &str, f: F) -> Result<(Session, T), E>
    where
        F: FnOnce(&mut Session) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut sessions = self.sessions.lock().unwrap();
        let slot = sessions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let mut working = slot.clone();
        let value = f(&mut working)?;
        *slot = working.clone();
        Ok((working, value))
    }

    fn list(&self) -> Result<Vec<Session>, StoreError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions.values().cloned().collect())
    }

    fn set_ai_evaluation_status_if_absent(
        &self,
        id: &str,
        status: AiEvaluationStatus,
    ) -> Result<bool, StoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if session.ai_evaluation_status.is_some() {
            return Ok(false);
        }
        session.ai_evaluation_status = Some(status);
        Ok(true)
    }
}
