use serde::{Deserialize, Serialize};

pub type Score = i32;

/// Largest absolute weight a configured rule may carry.
pub const MAX_RULE_WEIGHT: Score = 1000;

/// Single-dimension contribution for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRule {
    pub dimension: String,
    pub option: String,
    pub weight: Score,
}

impl BaseRule {
    pub fn new(dimension: &str, option: &str, weight: Score) -> Self {
        Self {
            dimension: dimension.to_string(),
            option: option.to_string(),
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub dimension: String,
    pub option: String,
}

/// Adjustment for one candidate that fires only when every condition holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRule {
    pub when: Vec<Condition>,
    pub candidate: String,
    pub weight: Score,
}

impl InteractionRule {
    pub fn new(when: &[(&str, &str)], candidate: &str, weight: Score) -> Self {
        Self {
            when: when
                .iter()
                .map(|(dimension, option)| Condition {
                    dimension: dimension.to_string(),
                    option: option.to_string(),
                })
                .collect(),
            candidate: candidate.to_string(),
            weight,
        }
    }
}
