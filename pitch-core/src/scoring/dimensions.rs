//! Evaluation dimensions and the criterion partition table

use serde::{Deserialize, Serialize};

/// One of the five fixed evaluation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Communication,
    OwnProduct,
    Competitor,
    CustomerInfo,
    Methodology,
}

impl Dimension {
    /// All five dimensions, in rubric order
    pub const ALL: [Dimension; 5] = [
        Dimension::Communication,
        Dimension::OwnProduct,
        Dimension::Competitor,
        Dimension::CustomerInfo,
        Dimension::Methodology,
    ];

    /// Convert to wire/JSON string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Communication => "communication",
            Self::OwnProduct => "own_product",
            Self::Competitor => "competitor",
            Self::CustomerInfo => "customer_info",
            Self::Methodology => "methodology",
        }
    }

    /// Parse from wire/JSON string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "communication" => Some(Self::Communication),
            "own_product" => Some(Self::OwnProduct),
            "competitor" => Some(Self::Competitor),
            "customer_info" => Some(Self::CustomerInfo),
            "methodology" => Some(Self::Methodology),
            _ => None,
        }
    }
}

/// Number of rubric criteria in a mentor evaluation
pub const CRITERION_COUNT: usize = 14;

/// Static criterion-id to dimension partition (4/3/3/3/1).
///
/// Membership is keyed by criterion id, not by position, so reordering the
/// rubric cannot silently shift a criterion into another dimension.
pub const CRITERION_PARTITION: [(u8, Dimension); CRITERION_COUNT] = [
    (1, Dimension::Communication),
    (2, Dimension::Communication),
    (3, Dimension::Communication),
    (4, Dimension::Communication),
    (5, Dimension::OwnProduct),
    (6, Dimension::OwnProduct),
    (7, Dimension::OwnProduct),
    (8, Dimension::Competitor),
    (9, Dimension::Competitor),
    (10, Dimension::Competitor),
    (11, Dimension::CustomerInfo),
    (12, Dimension::CustomerInfo),
    (13, Dimension::CustomerInfo),
    (14, Dimension::Methodology),
];

/// Dimension owning the given criterion id, if the id is part of the rubric
pub fn dimension_for_criterion(id: u8) -> Option<Dimension> {
    CRITERION_PARTITION
        .iter()
        .find(|(criterion_id, _)| *criterion_id == id)
        .map(|(_, dimension)| *dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_roundtrip() {
        for dimension in Dimension::ALL {
            let s = dimension.as_str();
            assert_eq!(Dimension::parse(s), Some(dimension));
        }
    }

    #[test]
    fn dimension_parse_rejects_unknown() {
        assert_eq!(Dimension::parse("charisma"), None);
    }

    #[test]
    fn dimension_serde_uses_snake_case() {
        let json = serde_json::to_string(&Dimension::OwnProduct).unwrap();
        assert_eq!(json, "\"own_product\"");

        let parsed: Dimension = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Dimension::OwnProduct);
    }

    #[test]
    fn partition_covers_ids_one_through_fourteen() {
        let ids: Vec<u8> = CRITERION_PARTITION.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, (1..=14).collect::<Vec<u8>>());
    }

    #[test]
    fn partition_sizes_are_4_3_3_3_1() {
        let count = |dimension: Dimension| {
            CRITERION_PARTITION
                .iter()
                .filter(|(_, d)| *d == dimension)
                .count()
        };
        assert_eq!(count(Dimension::Communication), 4);
        assert_eq!(count(Dimension::OwnProduct), 3);
        assert_eq!(count(Dimension::Competitor), 3);
        assert_eq!(count(Dimension::CustomerInfo), 3);
        assert_eq!(count(Dimension::Methodology), 1);
    }

    #[test]
    fn dimension_for_criterion_matches_partition() {
        assert_eq!(dimension_for_criterion(1), Some(Dimension::Communication));
        assert_eq!(dimension_for_criterion(4), Some(Dimension::Communication));
        assert_eq!(dimension_for_criterion(5), Some(Dimension::OwnProduct));
        assert_eq!(dimension_for_criterion(10), Some(Dimension::Competitor));
        assert_eq!(dimension_for_criterion(13), Some(Dimension::CustomerInfo));
        assert_eq!(dimension_for_criterion(14), Some(Dimension::Methodology));
    }

    #[test]
    fn dimension_for_criterion_rejects_out_of_rubric_ids() {
        assert_eq!(dimension_for_criterion(0), None);
        assert_eq!(dimension_for_criterion(15), None);
    }
}
