//! Session lifecycle state machine
//!
//! Pure transition functions over [`Session`]: in_progress -> submitted ->
//! evaluated, with the legacy `completed` terminal reachable from
//! in_progress and treated as "practice ended, not yet scored". Duplicate
//! calls whose target state already holds are no-ops so flaky clients can
//! retry safely; the status field never moves backwards.

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{EvaluationError, SessionError};
use crate::scoring::{self, Evaluation, MentorEvaluation};

use super::duration;
use super::types::{AiEvaluationStatus, Scenario, Session, SessionStatus};

/// Result of a submit call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// Duplicate client retry; nothing changed
    AlreadySubmitted,
}

/// Result of attaching an AI evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    Attached,
    /// Duplicate delivery; the first stored evaluation wins
    AlreadyEvaluated,
}

/// Create a new session owned by `student_id`
pub fn start(
    student_id: impl Into<String>,
    scenario: Scenario,
    customer_profile: Value,
) -> Session {
    let (task_template_id, task_config) = match scenario {
        Scenario::Template(id) => (Some(id), None),
        Scenario::Config(config) => (None, Some(config)),
    };

    Session {
        id: Uuid::new_v4().to_string(),
        student_id: student_id.into(),
        task_template_id,
        task_config,
        customer_profile,
        status: SessionStatus::InProgress,
        conversation: Vec::new(),
        ai_evaluation: None,
        mentor_evaluation: None,
        ai_evaluation_status: Some(AiEvaluationStatus::Pending),
        started_at: Utc::now(),
        completed_at: None,
        submitted_at: None,
        duration_minutes: None,
    }
}

/// Submit a finished practice run for scoring.
///
/// Legal from `in_progress` and the legacy `completed` status. Stamps
/// `submitted_at`, backfills `completed_at`, recomputes the duration, and
/// marks the AI evaluation in progress when none exists yet.
pub fn submit(session: &mut Session) -> Result<SubmitOutcome, SessionError> {
    match session.status {
        SessionStatus::InProgress | SessionStatus::Completed => {
            let now = Utc::now();
            session.status = SessionStatus::Submitted;
            session.submitted_at = Some(now);
            let completed_at = *session.completed_at.get_or_insert(now);
            session.duration_minutes = Some(duration::compute(session.started_at, completed_at));
            if session.ai_evaluation.is_none() {
                session.ai_evaluation_status = Some(AiEvaluationStatus::InProgress);
            }
            Ok(SubmitOutcome::Submitted)
        }
        SessionStatus::Submitted => Ok(SubmitOutcome::AlreadySubmitted),
        SessionStatus::Evaluated => Err(SessionError::InvalidTransition {
            from: "evaluated",
            to: "submitted",
        }),
    }
}

/// Attach an AI evaluation to a submitted session.
///
/// The payload is validated before anything is touched; a rejected payload
/// leaves the session unchanged. A null `overall_score` is legal only in
/// stored legacy records, never on attach: a completed evaluation status
/// must always imply a present overall score. An evaluation arriving
/// before submission signals an upstream bug and is surfaced, not retried.
pub fn attach_ai_evaluation(
    session: &mut Session,
    evaluation: Evaluation,
) -> Result<AttachOutcome, SessionError> {
    scoring::validate_evaluation(&evaluation)?;
    if evaluation.overall_score.is_none() {
        return Err(EvaluationError::MissingOverallScore.into());
    }

    match session.status {
        SessionStatus::Submitted => {
            session.ai_evaluation = Some(evaluation);
            session.status = SessionStatus::Evaluated;
            session.ai_evaluation_status = Some(AiEvaluationStatus::Completed);
            Ok(AttachOutcome::Attached)
        }
        SessionStatus::Evaluated => {
            if session.ai_evaluation.is_some() {
                Ok(AttachOutcome::AlreadyEvaluated)
            } else {
                // Evaluated without a stored evaluation is a corrupt legacy
                // record; accept the payload to repair it
                session.ai_evaluation = Some(evaluation);
                session.ai_evaluation_status = Some(AiEvaluationStatus::Completed);
                Ok(AttachOutcome::Attached)
            }
        }
        SessionStatus::InProgress | SessionStatus::Completed => {
            Err(SessionError::OutOfOrderEvaluation {
                status: session.status.as_str().to_string(),
            })
        }
    }
}

/// Attach a mentor review; legal in any state past `in_progress`.
///
/// Does not alter `status`. The stored dimension averages are always
/// recomputed from the detailed scores, never trusted from the payload.
pub fn attach_mentor_evaluation(
    session: &mut Session,
    mut mentor: MentorEvaluation,
) -> Result<(), SessionError> {
    if session.status == SessionStatus::InProgress {
        return Err(SessionError::InvalidTransition {
            from: "in_progress",
            to: "mentor_review",
        });
    }

    scoring::validate_mentor_evaluation(&mentor)?;
    mentor.dimension_averages = scoring::reduce_mentor_scores(&mentor.detailed_scores);
    session.mentor_evaluation = Some(mentor);
    Ok(())
}
