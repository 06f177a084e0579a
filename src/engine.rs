use crate::scoring::RuleTable;
use crate::types::{AnswerSet, Candidate, Confidence, RankedCandidate, Recommendation, Score};
use std::collections::HashSet;
use thiserror::Error;

/// Dimension priority used to pick the single explanation for a winner.
pub const DEFAULT_REASON_ORDER: [&str; 5] = ["scope", "task", "stakes", "priority", "autonomy"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("recommendation needs at least two candidates, got {found}")]
    InsufficientCandidates { found: usize },

    #[error("duplicate candidate id: {0}")]
    DuplicateCandidateId(String),
}

pub fn default_reason_order() -> Vec<String> {
    DEFAULT_REASON_ORDER.iter().map(ToString::to_string).collect()
}

/// Stateless recommender over injected rules. Safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    rules: &'a RuleTable,
    reason_order: &'a [String],
}

impl<'a> Engine<'a> {
    pub fn new(rules: &'a RuleTable, reason_order: &'a [String]) -> Self {
        Self {
            rules,
            reason_order,
        }
    }

    pub fn score(&self, candidate_id: &str, answers: &AnswerSet) -> Score {
        self.rules.score(candidate_id, answers)
    }

    pub fn recommend(
        &self,
        candidates: &[Candidate],
        answers: &AnswerSet,
    ) -> Result<Recommendation, RecommendError> {
        if candidates.len() < 2 {
            return Err(RecommendError::InsufficientCandidates {
                found: candidates.len(),
            });
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = candidates
            .iter()
            .find(|candidate| !seen.insert(candidate.id.as_str()))
        {
            return Err(RecommendError::DuplicateCandidateId(duplicate.id.clone()));
        }

        let mut scored: Vec<(&Candidate, Score)> = candidates
            .iter()
            .map(|candidate| (candidate, self.score(&candidate.id, answers)))
            .collect();
        // Vec::sort_by is stable, so equal scores keep input order.
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let (winner, winner_score) = scored[0];
        let (runner_up, runner_up_score) = scored[1];
        let margin = winner_score.saturating_sub(runner_up_score);

        Ok(Recommendation {
            winner: winner.clone(),
            runner_up: runner_up.clone(),
            reason: self.reason(winner, answers),
            confidence: Confidence::from_margin(margin),
            margin,
            ranking: scored
                .iter()
                .map(|(candidate, score)| RankedCandidate {
                    id: candidate.id.clone(),
                    name: candidate.name.clone(),
                    score: *score,
                })
                .collect(),
        })
    }

    fn reason(&self, winner: &Candidate, answers: &AnswerSet) -> String {
        self.reason_order
            .iter()
            .filter_map(|dimension| answers.get(dimension))
            .find_map(|option| winner.why_for(option))
            .map(ToString::to_string)
            .unwrap_or_else(|| fallback_reason(&winner.name))
    }
}

pub fn fallback_reason(name: &str) -> String {
    format!("{name} is the right fit for this combination of task type, stakes, and scope.")
}
