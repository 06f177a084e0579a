use super::catalog::Candidate;
use super::scoring::Score;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How clearly the winner beat the runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Strong,
    Good,
    Close,
}

impl Confidence {
    pub const STRONG_MARGIN: Score = 6;
    pub const GOOD_MARGIN: Score = 3;

    pub fn from_margin(margin: Score) -> Self {
        if margin >= Self::STRONG_MARGIN {
            Confidence::Strong
        } else if margin >= Self::GOOD_MARGIN {
            Confidence::Good
        } else {
            Confidence::Close
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Strong => "strong",
            Confidence::Good => "good",
            Confidence::Close => "close",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub name: String,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub winner: Candidate,
    pub runner_up: Candidate,
    pub reason: String,
    pub confidence: Confidence,
    pub margin: Score,
    /// Every candidate, highest score first, ties kept in input order.
    pub ranking: Vec<RankedCandidate>,
}
