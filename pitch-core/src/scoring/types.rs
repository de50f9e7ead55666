//! Evaluation payload types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dimensions::Dimension;

/// Maximum length of any feedback text (chars)
pub const MAX_FEEDBACK_LEN: usize = 2000;
/// Maximum length of a single suggestion or strength entry (chars)
pub const MAX_LIST_ITEM_LEN: usize = 500;
/// Maximum number of suggestions or strengths per list
pub const MAX_LIST_ITEMS: usize = 20;
/// Maximum length of a criterion label (chars)
pub const MAX_CRITERIA_LEN: usize = 300;

/// AI-produced evaluation of a submitted session.
///
/// Delivered by the external scoring provider; the shape is not trusted and
/// must pass [`validate_evaluation`](super::validate_evaluation) before it
/// is attached to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Overall score 0-100. Optional only so stored legacy payloads keep
    /// deserializing; attaching a new evaluation requires it
    pub overall_score: Option<f64>,
    /// One entry per dimension; validated for exact coverage
    pub dimension_scores: Vec<DimensionScore>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Set once by the provider, immutable afterwards
    pub generated_at: DateTime<Utc>,
}

/// Score and feedback for one evaluation dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: f64,
    pub feedback: String,
    /// Optional per-criterion breakdown
    #[serde(default)]
    pub details: Option<Vec<CriterionDetail>>,
}

/// Per-criterion entry inside an AI dimension score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionDetail {
    pub id: u8,
    pub criteria: String,
    pub score: f64,
    pub feedback: String,
    #[serde(default)]
    pub evidence: Option<String>,
}

/// Mentor review over the full 14-criterion rubric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorEvaluation {
    /// Supplied by the reviewer, not derived from the averages; the two may
    /// legitimately diverge
    pub overall_score: f64,
    pub feedback: String,
    /// Reviewer reference
    pub evaluated_by: String,
    pub evaluated_at: DateTime<Utc>,
    /// Exactly the 14 rubric criteria
    pub detailed_scores: Vec<CriterionScore>,
    /// Derived from detailed_scores on attach; never trusted from the payload
    #[serde(default)]
    pub dimension_averages: DimensionAverages,
}

/// One scored rubric criterion in a mentor review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub id: u8,
    pub criteria: String,
    /// None = not assessed; excluded from its partition mean
    #[serde(default)]
    pub score: Option<f64>,
}

/// Per-dimension mean of the present criterion scores.
///
/// None means the partition had no scored criteria ("insufficient data"),
/// which is distinct from a zero score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionAverages {
    pub communication: Option<f64>,
    pub own_product: Option<f64>,
    pub competitor: Option<f64>,
    pub customer_info: Option<f64>,
    pub methodology: Option<f64>,
}

impl DimensionAverages {
    /// Average for the given dimension
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Communication => self.communication,
            Dimension::OwnProduct => self.own_product,
            Dimension::Competitor => self.competitor,
            Dimension::CustomerInfo => self.customer_info,
            Dimension::Methodology => self.methodology,
        }
    }

    pub(crate) fn set(&mut self, dimension: Dimension, value: Option<f64>) {
        match dimension {
            Dimension::Communication => self.communication = value,
            Dimension::OwnProduct => self.own_product = value,
            Dimension::Competitor => self.competitor = value,
            Dimension::CustomerInfo => self.customer_info = value,
            Dimension::Methodology => self.methodology = value,
        }
    }
}
