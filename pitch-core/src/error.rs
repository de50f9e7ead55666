//! Error types for pitch-core

use thiserror::Error;

use crate::store::StoreError;

/// Top-level error type for pitch-core
#[derive(Error, Debug)]
pub enum PitchError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Conversation error: {0}")]
    Conversation(#[from] ConversationError),

    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from session lifecycle transitions
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("AI evaluation arrived before submission (session status: {status})")]
    OutOfOrderEvaluation { status: String },

    #[error("Evaluation rejected: {0}")]
    Validation(#[from] EvaluationError),
}

/// Errors from conversation log appends
#[derive(Error, Debug)]
pub enum ConversationError {
    #[error("Unknown message role: {0}")]
    InvalidRole(String),

    #[error("Message text is {len} chars, limit is {max}")]
    TextTooLong { len: usize, max: usize },
}

/// Errors from evaluation payload validation
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Score out of range for {field}: {value}")]
    InvalidScore { field: String, value: f64 },

    #[error("Missing overall score")]
    MissingOverallScore,

    #[error("Missing dimension score: {dimension}")]
    MissingDimension { dimension: &'static str },

    #[error("Duplicate dimension score: {dimension}")]
    DuplicateDimension { dimension: &'static str },

    #[error("Unknown criterion id: {id}")]
    UnknownCriterion { id: u8 },

    #[error("Missing criterion id: {id}")]
    MissingCriterion { id: u8 },

    #[error("Duplicate criterion id: {id}")]
    DuplicateCriterion { id: u8 },

    #[error("Text too long in {field}: {len} chars, limit is {max}")]
    TextTooLong {
        field: String,
        len: usize,
        max: usize,
    },

    #[error("Too many items in {field}: {count}, limit is {max}")]
    TooManyItems {
        field: String,
        count: usize,
        max: usize,
    },
}
