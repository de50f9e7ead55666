//! JSON-file-backed session store
//!
//! Whole-document store: the full session map is serialized to one JSON
//! file and replaced atomically (write temp file, rename) on every
//! mutation. Suited to the repair CLI and small deployments, not high
//! write volume.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::session::{AiEvaluationStatus, Session};

use super::{SessionStore, StoreError};

pub struct JsonFileStore {
    path: PathBuf,
    sessions: Mutex<HashMap<String, Session>>,
}

impl JsonFileStore {
    /// Open a store file, starting empty if the file does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let sessions = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            sessions: Mutex::new(sessions),
        })
    }

    fn persist(&self, sessions: &HashMap<String, Session>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(sessions)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn insert(&self, session: &Session) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(session.id.clone(), session.clone());
        self.persist(&sessions)
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
            }
            None => return Err(StoreError::NotFound(session.id.clone())),
        }
        self.persist(&sessions)
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
        self.persist(&sessions)?;
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
        self.persist(&sessions)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Scenario, lifecycle};
    use serde_json::json;

    fn test_session() -> Session {
        lifecycle::start(
            "student-1",
            Scenario::Template("tpl-1".to_string()),
            json!({"name": "Buyer"}),
        )
    }

    #[test]
    fn open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("sessions.json")).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn sessions_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");
        let session = test_session();

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.insert(&session).unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        let loaded = store.get(&session.id).unwrap();
        assert_eq!(loaded, Some(session));
    }

    #[test]
    fn update_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");
        let mut session = test_session();

        let store = JsonFileStore::open(&path).unwrap();
        store.insert(&session).unwrap();
        session.student_id = "student-2".to_string();
        store.update(&session).unwrap();
        drop(store);

        let store = JsonFileStore::open(&path).unwrap();
        let loaded = store.get(&session.id).unwrap().unwrap();
        assert_eq!(loaded.student_id, "student-2");
    }

    #[test]
    fn update_unknown_id_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");
        let store = JsonFileStore::open(&path).unwrap();

        assert!(matches!(
            store.update(&test_session()),
            Err(StoreError::NotFound(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn modify_persists_the_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");
        let session = test_session();

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.insert(&session).unwrap();
            store
                .modify(&session.id, |session| {
                    session.student_id = "student-2".to_string();
                    Ok::<_, StoreError>(())
                })
                .unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        let loaded = store.get(&session.id).unwrap().unwrap();
        assert_eq!(loaded.student_id, "student-2");
    }

    #[test]
    fn set_status_if_absent_respects_present_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");
        let store = JsonFileStore::open(&path).unwrap();

        let mut legacy = test_session();
        legacy.ai_evaluation_status = None;
        store.insert(&legacy).unwrap();

        assert!(
            store
                .set_ai_evaluation_status_if_absent(&legacy.id, AiEvaluationStatus::Pending)
                .unwrap()
        );
        assert!(
            !store
                .set_ai_evaluation_status_if_absent(&legacy.id, AiEvaluationStatus::Completed)
                .unwrap()
        );

        let loaded = store.get(&legacy.id).unwrap().unwrap();
        assert_eq!(loaded.ai_evaluation_status, Some(AiEvaluationStatus::Pending));
    }

    #[test]
    fn open_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");
        fs::write(&path, "not json").unwrap();

        let result = JsonFileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
