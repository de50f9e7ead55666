//! Session record and status enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::conversation::Message;
use crate::scoring::{Evaluation, MentorEvaluation};

/// Lifecycle status of a practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Student is practicing
    InProgress,
    /// Legacy terminal meaning "practice ended, not yet scored"
    Completed,
    /// Handed over for AI scoring
    Submitted,
    /// AI evaluation attached
    Evaluated,
}

impl SessionStatus {
    /// Convert to wire/JSON string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Submitted => "submitted",
            Self::Evaluated => "evaluated",
        }
    }

    /// Parse from wire/JSON string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "submitted" => Some(Self::Submitted),
            "evaluated" => Some(Self::Evaluated),
            _ => None,
        }
    }
}

/// Monitoring field tracking AI scoring progress, derived from whether an
/// AI evaluation exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiEvaluationStatus {
    Pending,
    InProgress,
    Completed,
}

impl AiEvaluationStatus {
    /// Convert to wire/JSON string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Parse from wire/JSON string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Scenario description for a new session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scenario {
    /// Reference to an authored task template
    Template(String),
    /// Freeform task configuration
    Config(Value),
}

/// One practice conversation between a student and a simulated customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique id, assigned at creation, immutable
    pub id: String,
    /// Owning student, immutable
    pub student_id: String,
    /// Authored scenario reference; exclusive with task_config in new records
    #[serde(default)]
    pub task_template_id: Option<String>,
    /// Freeform scenario payload; both may be absent only in legacy records
    #[serde(default)]
    pub task_config: Option<Value>,
    /// Opaque customer description, immutable after creation
    pub customer_profile: Value,
    pub status: SessionStatus,
    #[serde(default)]
    pub conversation: Vec<Message>,
    #[serde(default)]
    pub ai_evaluation: Option<Evaluation>,
    #[serde(default)]
    pub mentor_evaluation: Option<MentorEvaluation>,
    /// None only in legacy records; repaired by the StatusReconciler before
    /// consumers may trust the record
    #[serde(default)]
    pub ai_evaluation_status: Option<AiEvaluationStatus>,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Derived: minutes between started_at and completed_at
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_status_roundtrip() {
        for status in [
            SessionStatus::InProgress,
            SessionStatus::Completed,
            SessionStatus::Submitted,
            SessionStatus::Evaluated,
        ] {
            assert_eq!(SessionStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn ai_evaluation_status_roundtrip() {
        for status in [
            AiEvaluationStatus::Pending,
            AiEvaluationStatus::InProgress,
            AiEvaluationStatus::Completed,
        ] {
            assert_eq!(AiEvaluationStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn session_status_serde_matches_as_str() {
        let json = serde_json::to_string(&SessionStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn legacy_record_without_ai_evaluation_status_deserializes() {
        let json = r#"{
            "id": "s-1",
            "student_id": "student-1",
            "customer_profile": {"name": "Buyer"},
            "status": "submitted",
            "started_at": "2026-01-10T12:00:00Z"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.status, SessionStatus::Submitted);
        assert_eq!(session.ai_evaluation_status, None);
        assert!(session.conversation.is_empty());
        assert!(session.task_template_id.is_none());
        assert!(session.task_config.is_none());
    }
}
