//! Append-only conversation log
//!
//! Messages carry server-assigned timestamps so concurrent connections on
//! the same session cannot reorder the log with skewed client clocks. There
//! is no edit or delete operation; the log is an audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConversationError;
use crate::session::Session;

/// Maximum message text length (chars)
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Role of a message in the practice conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    Student,
    AiCustomer,
}

impl MessageRole {
    /// Convert to wire/JSON string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::AiCustomer => "ai_customer",
        }
    }

    /// Parse from wire/JSON string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Self::Student),
            "ai_customer" => Some(Self::AiCustomer),
            _ => None,
        }
    }
}

impl std::str::FromStr for MessageRole {
    type Err = ConversationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConversationError::InvalidRole(s.to_string()))
    }
}

/// One message in a session's conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub text: String,
    /// Server-assigned; non-decreasing within a session
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Append a message with a server-assigned timestamp.
///
/// The timestamp never goes below the previous message's, so the log stays
/// non-decreasing even when the wall clock steps backwards. Returns the
/// appended message for broadcast to the notification collaborator.
pub fn append_message(
    session: &mut Session,
    role: MessageRole,
    text: impl Into<String>,
    metadata: Option<Value>,
) -> Result<Message, ConversationError> {
    let text = text.into();
    let len = text.chars().count();
    if len > MAX_MESSAGE_LEN {
        return Err(ConversationError::TextTooLong {
            len,
            max: MAX_MESSAGE_LEN,
        });
    }

    let mut timestamp = Utc::now();
    if let Some(last) = session.conversation.last() {
        if last.timestamp > timestamp {
            timestamp = last.timestamp;
        }
    }

    let message = Message {
        role,
        text,
        timestamp,
        metadata,
    };
    session.conversation.push(message.clone());
    Ok(message)
}

/// Authoritative message count; always the live sequence length, never a
/// separately cached counter
pub fn message_count(session: &Session) -> usize {
    session.conversation.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Scenario, lifecycle};
    use chrono::Duration;
    use serde_json::json;

    fn test_session() -> Session {
        lifecycle::start(
            "student-1",
            Scenario::Template("tpl-1".to_string()),
            json!({"name": "Skeptical CTO"}),
        )
    }

    #[test]
    fn message_role_roundtrip() {
        for role in [MessageRole::Student, MessageRole::AiCustomer] {
            assert_eq!(MessageRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn message_role_from_str_rejects_unknown() {
        let result: Result<MessageRole, _> = "moderator".parse();
        assert!(matches!(result, Err(ConversationError::InvalidRole(_))));
    }

    #[test]
    fn message_role_serde_uses_snake_case() {
        let json = serde_json::to_string(&MessageRole::AiCustomer).unwrap();
        assert_eq!(json, "\"ai_customer\"");
    }

    #[test]
    fn append_adds_message_and_count_tracks_length() {
        let mut session = test_session();
        assert_eq!(message_count(&session), 0);

        append_message(&mut session, MessageRole::Student, "Hello", None).unwrap();
        append_message(&mut session, MessageRole::AiCustomer, "Hi there", None).unwrap();

        assert_eq!(message_count(&session), 2);
        assert_eq!(session.conversation[0].text, "Hello");
        assert_eq!(session.conversation[1].role, MessageRole::AiCustomer);
    }

    #[test]
    fn append_returns_the_stored_message() {
        let mut session = test_session();
        let message = append_message(
            &mut session,
            MessageRole::Student,
            "Hello",
            Some(json!({"channel": "web"})),
        )
        .unwrap();
        assert_eq!(session.conversation.last(), Some(&message));
    }

    #[test]
    fn append_rejects_oversized_text() {
        let mut session = test_session();
        let result = append_message(
            &mut session,
            MessageRole::Student,
            "x".repeat(MAX_MESSAGE_LEN + 1),
            None,
        );
        assert!(matches!(
            result,
            Err(ConversationError::TextTooLong { len, max })
                if len == MAX_MESSAGE_LEN + 1 && max == MAX_MESSAGE_LEN
        ));
        assert_eq!(message_count(&session), 0);
    }

    #[test]
    fn append_accepts_text_at_the_boundary() {
        let mut session = test_session();
        let result = append_message(
            &mut session,
            MessageRole::Student,
            "x".repeat(MAX_MESSAGE_LEN),
            None,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn timestamps_are_non_decreasing() {
        let mut session = test_session();
        for i in 0..5 {
            append_message(&mut session, MessageRole::Student, format!("msg {i}"), None).unwrap();
        }
        let timestamps: Vec<_> = session.conversation.iter().map(|m| m.timestamp).collect();
        assert!(timestamps.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn clock_regression_does_not_reorder_the_log() {
        let mut session = test_session();
        append_message(&mut session, MessageRole::Student, "first", None).unwrap();
        // Simulate a record written under a fast clock
        let future = Utc::now() + Duration::minutes(5);
        session.conversation[0].timestamp = future;

        append_message(&mut session, MessageRole::AiCustomer, "second", None).unwrap();
        assert_eq!(session.conversation[1].timestamp, future);
    }
}
