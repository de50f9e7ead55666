//! Score validation and reduction
//!
//! Validates evaluation payloads handed over by the external scoring
//! provider (shape is not trusted) and reduces mentor rubric scores into
//! per-dimension averages over the static partition.

use std::collections::HashSet;

use crate::error::EvaluationError;

use super::dimensions::{CRITERION_PARTITION, Dimension, dimension_for_criterion};
use super::types::{
    CriterionScore, DimensionAverages, Evaluation, MAX_CRITERIA_LEN, MAX_FEEDBACK_LEN,
    MAX_LIST_ITEM_LEN, MAX_LIST_ITEMS, MentorEvaluation,
};

fn check_score(field: &str, value: f64) -> Result<(), EvaluationError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(EvaluationError::InvalidScore {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_text(field: &str, text: &str, max: usize) -> Result<(), EvaluationError> {
    let len = text.chars().count();
    if len > max {
        return Err(EvaluationError::TextTooLong {
            field: field.to_string(),
            len,
            max,
        });
    }
    Ok(())
}

fn check_list(field: &str, items: &[String]) -> Result<(), EvaluationError> {
    if items.len() > MAX_LIST_ITEMS {
        return Err(EvaluationError::TooManyItems {
            field: field.to_string(),
            count: items.len(),
            max: MAX_LIST_ITEMS,
        });
    }
    for (index, item) in items.iter().enumerate() {
        check_text(&format!("{field}[{index}]"), item, MAX_LIST_ITEM_LEN)?;
    }
    Ok(())
}

/// Validate an AI evaluation payload.
///
/// Rejects any score outside [0, 100], dimension coverage that is not
/// exactly the five fixed dimensions, and text over its bound. Nothing is
/// partially accepted.
pub fn validate_evaluation(evaluation: &Evaluation) -> Result<(), EvaluationError> {
    if let Some(overall) = evaluation.overall_score {
        check_score("overall_score", overall)?;
    }

    let mut seen: HashSet<Dimension> = HashSet::new();
    for entry in &evaluation.dimension_scores {
        if !seen.insert(entry.dimension) {
            return Err(EvaluationError::DuplicateDimension {
                dimension: entry.dimension.as_str(),
            });
        }
        let name = entry.dimension.as_str();
        check_score(&format!("dimension_scores.{name}"), entry.score)?;
        check_text(
            &format!("dimension_scores.{name}.feedback"),
            &entry.feedback,
            MAX_FEEDBACK_LEN,
        )?;

        if let Some(details) = &entry.details {
            for detail in details {
                let field = format!("dimension_scores.{name}.details[{}]", detail.id);
                check_score(&field, detail.score)?;
                check_text(&format!("{field}.criteria"), &detail.criteria, MAX_CRITERIA_LEN)?;
                check_text(&format!("{field}.feedback"), &detail.feedback, MAX_FEEDBACK_LEN)?;
                if let Some(evidence) = &detail.evidence {
                    check_text(&format!("{field}.evidence"), evidence, MAX_FEEDBACK_LEN)?;
                }
            }
        }
    }

    for dimension in Dimension::ALL {
        if !seen.contains(&dimension) {
            return Err(EvaluationError::MissingDimension {
                dimension: dimension.as_str(),
            });
        }
    }

    check_list("suggestions", &evaluation.suggestions)?;
    check_list("strengths", &evaluation.strengths)?;

    Ok(())
}

/// Validate a mentor evaluation.
///
/// Requires exactly the 14 rubric criterion ids (no duplicates, no unknown
/// ids, no omissions) with every present score inside [0, 100].
pub fn validate_mentor_evaluation(mentor: &MentorEvaluation) -> Result<(), EvaluationError> {
    check_score("overall_score", mentor.overall_score)?;
    check_text("feedback", &mentor.feedback, MAX_FEEDBACK_LEN)?;

    let mut seen: HashSet<u8> = HashSet::new();
    for entry in &mentor.detailed_scores {
        if dimension_for_criterion(entry.id).is_none() {
            return Err(EvaluationError::UnknownCriterion { id: entry.id });
        }
        if !seen.insert(entry.id) {
            return Err(EvaluationError::DuplicateCriterion { id: entry.id });
        }
        check_text(
            &format!("detailed_scores[{}].criteria", entry.id),
            &entry.criteria,
            MAX_CRITERIA_LEN,
        )?;
        if let Some(score) = entry.score {
            check_score(&format!("detailed_scores[{}]", entry.id), score)?;
        }
    }

    for (id, _) in CRITERION_PARTITION {
        if !seen.contains(&id) {
            return Err(EvaluationError::MissingCriterion { id });
        }
    }

    Ok(())
}

/// Reduce mentor criterion scores into per-dimension averages.
///
/// Each partition's average is the arithmetic mean of its present scores;
/// an unscored criterion is excluded, not treated as zero. A partition with
/// no scored criteria yields an unset average.
pub fn reduce_mentor_scores(detailed_scores: &[CriterionScore]) -> DimensionAverages {
    let mut averages = DimensionAverages::default();
    for dimension in Dimension::ALL {
        let scores: Vec<f64> = detailed_scores
            .iter()
            .filter(|entry| dimension_for_criterion(entry.id) == Some(dimension))
            .filter_map(|entry| entry.score)
            .collect();
        let mean = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        };
        averages.set(dimension, mean);
    }
    averages
}
