//! Event type definitions

use serde::{Deserialize, Serialize};

use crate::conversation::Message;

/// Events emitted by session mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PitchEvent {
    /// A new practice session was created
    SessionStarted {
        session_id: String,
        student_id: String,
    },

    /// A message was appended; carries the full message for broadcast
    MessageAppended {
        session_id: String,
        message: Message,
    },

    /// The student submitted the session for scoring
    SessionSubmitted { session_id: String },

    /// The AI evaluation was attached
    AiEvaluationAttached {
        session_id: String,
        overall_score: Option<f64>,
    },

    /// A mentor review was attached
    MentorEvaluationAttached {
        session_id: String,
        evaluated_by: String,
    },
}

impl PitchEvent {
    /// Session this event belongs to
    pub fn session_id(&self) -> &str {
        match self {
            Self::SessionStarted { session_id, .. }
            | Self::MessageAppended { session_id, .. }
            | Self::SessionSubmitted { session_id }
            | Self::AiEvaluationAttached { session_id, .. }
            | Self::MentorEvaluationAttached { session_id, .. } => session_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_accessor_covers_all_variants() {
        let events = [
            PitchEvent::SessionStarted {
                session_id: "s1".to_string(),
                student_id: "u1".to_string(),
            },
            PitchEvent::SessionSubmitted {
                session_id: "s1".to_string(),
            },
            PitchEvent::AiEvaluationAttached {
                session_id: "s1".to_string(),
                overall_score: Some(85.0),
            },
            PitchEvent::MentorEvaluationAttached {
                session_id: "s1".to_string(),
                evaluated_by: "mentor-1".to_string(),
            },
        ];
        for event in events {
            assert_eq!(event.session_id(), "s1");
        }
    }

    #[test]
    fn event_serde_is_tagged_snake_case() {
        let event = PitchEvent::SessionSubmitted {
            session_id: "s1".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"session_submitted\""));

        let parsed: PitchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
