pub mod candidates;
pub mod questions;

use crate::engine::{default_reason_order, Engine};
use crate::error::{PickerError, Result};
use crate::scoring::RuleTable;
use crate::types::{AnswerSet, Candidate, Question, Score, MAX_RULE_WEIGHT};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Everything the engine needs, resolved once at startup and passed down.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub questions: Vec<Question>,
    pub candidates: Vec<Candidate>,
    /// Registry ids that take part in a recommendation, in ranking tie order.
    pub lineup: Vec<String>,
    pub rules: RuleTable,
    pub reason_order: Vec<String>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            questions: questions::builtin_questions(),
            candidates: candidates::builtin_candidates(),
            lineup: candidates::DEFAULT_LINEUP
                .iter()
                .map(ToString::to_string)
                .collect(),
            rules: RuleTable::builtin(),
            reason_order: default_reason_order(),
        }
    }

    pub fn engine(&self) -> Engine<'_> {
        Engine::new(&self.rules, &self.reason_order)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.id == id)
    }

    pub fn lineup_candidates(&self) -> Result<Vec<Candidate>> {
        self.lineup
            .iter()
            .map(|id| {
                self.candidate(id)
                    .cloned()
                    .ok_or_else(|| PickerError::UnknownCandidate(id.clone()))
            })
            .collect()
    }

    /// Rejects answers outside the question vocabulary. The engine itself
    /// accepts them and scores them as zero.
    pub fn validate_answers(&self, answers: &AnswerSet) -> Result<()> {
        for (dimension, option) in answers.iter() {
            let question = self
                .question(dimension)
                .ok_or_else(|| PickerError::UnknownDimension(dimension.to_string()))?;
            if !question.has_option(option) {
                return Err(PickerError::UnknownOption {
                    dimension: dimension.to_string(),
                    option: option.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if question.id.trim().is_empty() {
                return Err(PickerError::ConfigParse(
                    "questions entries must have a non-empty id".to_string(),
                ));
            }
            if !question_ids.insert(question.id.as_str()) {
                return Err(PickerError::ConfigParse(format!(
                    "duplicate question id: {}",
                    question.id
                )));
            }
            if question.options.len() < 2 {
                return Err(PickerError::ConfigParse(format!(
                    "question '{}' needs at least two options",
                    question.id
                )));
            }
            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(PickerError::ConfigParse(format!(
                        "question '{}' contains duplicate option: {}",
                        question.id, option.id
                    )));
                }
            }
        }

        let mut candidate_ids = HashSet::new();
        for candidate in &self.candidates {
            if !candidate_ids.insert(candidate.id.as_str()) {
                return Err(PickerError::ConfigParse(format!(
                    "duplicate candidate id: {}",
                    candidate.id
                )));
            }
        }

        let mut lineup_ids = HashSet::new();
        for id in &self.lineup {
            if !candidate_ids.contains(id.as_str()) {
                return Err(PickerError::ConfigParse(format!(
                    "picker.lineup references unknown candidate: {id}"
                )));
            }
            if !lineup_ids.insert(id.as_str()) {
                return Err(PickerError::ConfigParse(format!(
                    "picker.lineup contains duplicate candidate: {id}"
                )));
            }
        }
        if self.lineup.len() < 2 {
            return Err(PickerError::ConfigParse(
                "picker.lineup needs at least two candidates".to_string(),
            ));
        }

        let base_weights = self
            .rules
            .base
            .iter()
            .flat_map(|(candidate, rules)| {
                rules
                    .iter()
                    .map(move |rule| (candidate.as_str(), rule.weight))
            });
        let interaction_weights = self
            .rules
            .interactions
            .iter()
            .map(|rule| (rule.candidate.as_str(), rule.weight));
        for (candidate, weight) in base_weights.chain(interaction_weights) {
            if !weight_in_bounds(weight) {
                return Err(PickerError::ConfigParse(format!(
                    "rule weight {weight} for candidate '{candidate}' is outside -{MAX_RULE_WEIGHT}..={MAX_RULE_WEIGHT}"
                )));
            }
        }

        for (dimension, option) in self.rules.referenced_options() {
            let Some(question) = self.question(dimension) else {
                return Err(PickerError::ConfigParse(format!(
                    "rule references unknown dimension: {dimension}"
                )));
            };
            if !question.has_option(option) {
                return Err(PickerError::ConfigParse(format!(
                    "rule references unknown option '{option}' for dimension '{dimension}'"
                )));
            }
        }

        let mut ordered = HashSet::new();
        for dimension in &self.reason_order {
            if !question_ids.contains(dimension.as_str()) {
                return Err(PickerError::ConfigParse(format!(
                    "picker.reason_order references unknown dimension: {dimension}"
                )));
            }
            if !ordered.insert(dimension.as_str()) {
                return Err(PickerError::ConfigParse(format!(
                    "picker.reason_order contains duplicate dimension: {dimension}"
                )));
            }
        }

        Ok(())
    }

    /// SHA-256 of the rules and reason order, identifying what produced a result.
    pub fn fingerprint(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Fingerprinted<'a> {
            rules: &'a RuleTable,
            reason_order: &'a [String],
        }

        let bytes = serde_json::to_vec(&Fingerprinted {
            rules: &self.rules,
            reason_order: &self.reason_order,
        })?;
        let digest = Sha256::digest(&bytes);
        Ok(format!("{digest:x}"))
    }
}

fn weight_in_bounds(weight: Score) -> bool {
    (-MAX_RULE_WEIGHT..=MAX_RULE_WEIGHT).contains(&weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseRule, InteractionRule, QuestionOption};

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().expect("builtin catalog should validate");

        let ids: Vec<&str> = catalog.questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["task", "scope", "stakes", "priority", "autonomy"]);
        for question in &catalog.questions {
            assert!(question.options.len() >= 2);
            for option in &question.options {
                assert!(!option.id.is_empty());
                assert!(!option.label.is_empty());
            }
        }
    }

    #[test]
    fn lineup_resolves_in_lineup_order() {
        let catalog = Catalog::builtin();
        let lineup = catalog.lineup_candidates().expect("lineup should resolve");
        let ids: Vec<&str> = lineup.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            ["gemini-flash", "sonnet-4.6", "opus-4.6", "composer-1", "composer-1-5"]
        );
    }

    #[test]
    fn validate_answers_rejects_unknown_dimension_and_option() {
        let catalog = Catalog::builtin();
        let unknown_dimension: AnswerSet = [("budget", "low")].into_iter().collect();
        assert!(matches!(
            catalog.validate_answers(&unknown_dimension),
            Err(PickerError::UnknownDimension(dimension)) if dimension == "budget"
        ));

        // "gaps" is valid for autonomy but not for scope.
        let wrong_namespace: AnswerSet = [("scope", "gaps")].into_iter().collect();
        assert!(matches!(
            catalog.validate_answers(&wrong_namespace),
            Err(PickerError::UnknownOption { .. })
        ));

        let partial: AnswerSet = [("task", "vision")].into_iter().collect();
        assert!(catalog.validate_answers(&partial).is_ok());
    }

    #[test]
    fn validate_rejects_rule_for_unknown_option() {
        let mut catalog = Catalog::builtin();
        catalog
            .rules
            .add_rule("opus-4.6", BaseRule::new("stakes", "galactic", 9));
        let err = catalog.validate().expect_err("invalid rule should fail");
        assert!(err.to_string().contains("galactic"));
    }

    #[test]
    fn validate_rejects_out_of_range_weights() {
        let mut catalog = Catalog::builtin();
        catalog
            .rules
            .add_rule("opus-4.6", BaseRule::new("stakes", "critical", Score::MAX));
        let err = catalog.validate().expect_err("huge weight should fail");
        assert!(matches!(err, PickerError::ConfigParse(_)));
        assert!(err.to_string().contains("opus-4.6"));

        let mut catalog = Catalog::builtin();
        catalog.rules.add_interaction(InteractionRule::new(
            &[("task", "coding")],
            "sonnet-4.6",
            -MAX_RULE_WEIGHT - 1,
        ));
        assert!(catalog.validate().is_err());

        let mut catalog = Catalog::builtin();
        catalog
            .rules
            .add_rule("opus-4.6", BaseRule::new("stakes", "critical", MAX_RULE_WEIGHT));
        catalog.validate().expect("weight at the bound should pass");
    }

    #[test]
    fn validate_rejects_duplicate_option_within_question() {
        let mut catalog = Catalog::builtin();
        catalog.questions[0].options.push(QuestionOption {
            id: "coding".to_string(),
            label: "Coding again".to_string(),
            description: None,
        });
        let err = catalog.validate().expect_err("duplicate option should fail");
        assert!(err.to_string().contains("duplicate option"));
    }

    #[test]
    fn validate_rejects_unknown_lineup_and_reason_dimension() {
        let mut catalog = Catalog::builtin();
        catalog.lineup.push("gpt-9".to_string());
        assert!(catalog.validate().is_err());

        let mut catalog = Catalog::builtin();
        catalog.reason_order = vec!["scope".to_string(), "scope".to_string()];
        let err = catalog.validate().expect_err("duplicate reason dimension should fail");
        assert!(err.to_string().contains("duplicate dimension"));
    }

    #[test]
    fn fingerprint_tracks_rule_changes() {
        let catalog = Catalog::builtin();
        let original = catalog.fingerprint().expect("fingerprint should compute");
        assert_eq!(original.len(), 64);
        assert_eq!(
            original,
            Catalog::builtin().fingerprint().expect("fingerprint should compute")
        );

        let mut changed = Catalog::builtin();
        changed
            .rules
            .add_rule("opus-4.6", BaseRule::new("task", "vision", 1));
        assert_ne!(
            original,
            changed.fingerprint().expect("fingerprint should compute")
        );
    }
}
