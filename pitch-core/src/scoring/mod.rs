//! Scoring and evaluation validation
//!
//! Validates AI evaluation payloads and reduces mentor rubric scores into
//! dimension averages over a static criterion partition.

mod aggregator;
mod dimensions;
mod types;

pub use aggregator::{reduce_mentor_scores, validate_evaluation, validate_mentor_evaluation};
pub use dimensions::{CRITERION_COUNT, CRITERION_PARTITION, Dimension, dimension_for_criterion};
pub use types::{
    CriterionDetail, CriterionScore, DimensionAverages, DimensionScore, Evaluation,
    MAX_CRITERIA_LEN, MAX_FEEDBACK_LEN, MAX_LIST_ITEM_LEN, MAX_LIST_ITEMS, MentorEvaluation,
};
