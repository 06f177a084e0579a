mod builtin;

use crate::types::{AnswerSet, BaseRule, InteractionRule, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declarative scoring rules: per-candidate base rules plus cross-dimension
/// interaction adjustments that are added after the base sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub base: BTreeMap<String, Vec<BaseRule>>,
    pub interactions: Vec<InteractionRule>,
}

impl RuleTable {
    pub fn builtin() -> Self {
        builtin::rule_table()
    }

    pub fn add_rule(&mut self, candidate: &str, rule: BaseRule) {
        self.base.entry(candidate.to_string()).or_default().push(rule);
    }

    pub fn add_interaction(&mut self, rule: InteractionRule) {
        self.interactions.push(rule);
    }

    /// Sums saturate at the `Score` bounds instead of overflowing.
    pub fn score(&self, candidate_id: &str, answers: &AnswerSet) -> Score {
        self.base_score(candidate_id, answers)
            .saturating_add(self.interaction_score(candidate_id, answers))
    }

    pub fn base_score(&self, candidate_id: &str, answers: &AnswerSet) -> Score {
        self.base
            .get(candidate_id)
            .map(|rules| {
                rules
                    .iter()
                    .filter(|rule| answers.is(&rule.dimension, &rule.option))
                    .fold(0, |total: Score, rule| total.saturating_add(rule.weight))
            })
            .unwrap_or(0)
    }

    pub fn interaction_score(&self, candidate_id: &str, answers: &AnswerSet) -> Score {
        self.interactions
            .iter()
            .filter(|rule| rule.candidate == candidate_id)
            .filter(|rule| {
                rule.when
                    .iter()
                    .all(|condition| answers.is(&condition.dimension, &condition.option))
            })
            .fold(0, |total: Score, rule| total.saturating_add(rule.weight))
    }

    /// Every (dimension, option) pair any rule refers to, for validation.
    pub fn referenced_options(&self) -> impl Iterator<Item = (&str, &str)> {
        let base = self
            .base
            .values()
            .flatten()
            .map(|rule| (rule.dimension.as_str(), rule.option.as_str()));
        let interactions = self
            .interactions
            .iter()
            .flat_map(|rule| rule.when.iter())
            .map(|condition| (condition.dimension.as_str(), condition.option.as_str()));
        base.chain(interactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
        pairs.iter().copied().collect()
    }

    fn all_answers(overrides: &[(&str, &str)]) -> AnswerSet {
        let mut set = answers(&[
            ("task", "coding"),
            ("scope", "targeted"),
            ("stakes", "production"),
            ("priority", "balance"),
            ("autonomy", "gaps"),
        ]);
        for (dimension, option) in overrides {
            set.insert(*dimension, *option);
        }
        set
    }

    #[test]
    fn extreme_weights_saturate_instead_of_overflowing() {
        let mut rules = RuleTable::default();
        rules.add_rule("a", BaseRule::new("task", "x", Score::MAX));
        rules.add_rule("a", BaseRule::new("scope", "y", 1));
        rules.add_interaction(InteractionRule::new(&[("task", "x")], "a", 5));
        rules.add_rule("b", BaseRule::new("task", "x", Score::MIN));
        rules.add_rule("b", BaseRule::new("scope", "y", -1));

        let answers = answers(&[("task", "x"), ("scope", "y")]);
        assert_eq!(rules.base_score("a", &answers), Score::MAX);
        assert_eq!(rules.score("a", &answers), Score::MAX);
        assert_eq!(rules.score("b", &answers), Score::MIN);
    }

    #[test]
    fn gemini_scores_fifteen_for_vision_targeted_production_accuracy() {
        let rules = RuleTable::builtin();
        let score = rules.score(
            "gemini-flash",
            &answers(&[
                ("task", "vision"),
                ("scope", "targeted"),
                ("stakes", "production"),
                ("priority", "accuracy"),
                ("autonomy", "targeted"),
            ]),
        );
        assert_eq!(score, 15);
    }

    #[test]
    fn opus_gets_critical_accuracy_boost() {
        let rules = RuleTable::builtin();
        let score = rules.score(
            "opus-4.6",
            &answers(&[
                ("task", "reasoning"),
                ("scope", "architecture"),
                ("stakes", "critical"),
                ("priority", "accuracy"),
                ("autonomy", "gaps"),
            ]),
        );
        assert_eq!(score, 21);

        let accurate = rules.score(
            "opus-4.6",
            &all_answers(&[("stakes", "critical"), ("priority", "accuracy")]),
        );
        let balanced = rules.score(
            "opus-4.6",
            &all_answers(&[("stakes", "critical"), ("priority", "balance")]),
        );
        assert_eq!(accurate - balanced, 6);
    }

    #[test]
    fn composer_1_rewards_targeted_and_penalizes_drive() {
        let rules = RuleTable::builtin();
        let targeted = rules.score(
            "composer-1",
            &all_answers(&[("priority", "speed"), ("autonomy", "targeted")]),
        );
        assert_eq!(targeted, 18);

        let autonomous = rules.score("composer-1", &all_answers(&[("scope", "autonomous")]));
        let scoped = rules.score("composer-1", &all_answers(&[("scope", "targeted")]));
        assert!(scoped > autonomous);

        let drive = rules.score("composer-1", &all_answers(&[("autonomy", "drive")]));
        let pointed = rules.score("composer-1", &all_answers(&[("autonomy", "targeted")]));
        assert!(pointed > drive);
    }

    #[test]
    fn autonomous_drive_overlap_is_dampened_once() {
        let rules = RuleTable::builtin();
        let set = answers(&[
            ("task", "coding"),
            ("scope", "autonomous"),
            ("stakes", "prototype"),
            ("priority", "speed"),
            ("autonomy", "drive"),
        ]);
        assert_eq!(rules.base_score("composer-1-5", &set), 17);
        assert_eq!(rules.interaction_score("composer-1-5", &set), -2);
        assert_eq!(rules.score("composer-1-5", &set), 15);
    }

    #[test]
    fn critical_autonomous_scope_boosts_opus() {
        let rules = RuleTable::builtin();
        let multifile = rules.score(
            "opus-4.6",
            &all_answers(&[("stakes", "critical"), ("scope", "multifile")]),
        );
        let autonomous = rules.score(
            "opus-4.6",
            &all_answers(&[("stakes", "critical"), ("scope", "autonomous")]),
        );
        assert_eq!(autonomous - multifile, 1);
    }

    #[test]
    fn missing_dimensions_and_unknown_candidates_score_zero() {
        let rules = RuleTable::builtin();
        for candidate in [
            "gemini-flash",
            "sonnet-4.6",
            "opus-4.6",
            "composer-1",
            "composer-1-5",
        ] {
            assert_eq!(rules.score(candidate, &AnswerSet::new()), 0);
        }
        assert_eq!(rules.score("unknown-model", &all_answers(&[])), 0);
    }

    #[test]
    fn unmatched_option_contributes_nothing() {
        let rules = RuleTable::builtin();
        let typo = answers(&[("task", "codng")]);
        assert_eq!(rules.score("composer-1", &typo), 0);
    }

    #[test]
    fn interaction_without_conditions_always_applies() {
        let mut rules = RuleTable::default();
        rules.add_interaction(InteractionRule::new(&[], "a", 4));
        assert_eq!(rules.score("a", &AnswerSet::new()), 4);
        assert_eq!(rules.score("b", &AnswerSet::new()), 0);
    }

    #[test]
    fn same_option_id_in_different_dimensions_is_distinct() {
        let rules = RuleTable::builtin();
        let scope_only = answers(&[("scope", "targeted")]);
        let autonomy_only = answers(&[("autonomy", "targeted")]);
        assert_eq!(rules.score("composer-1-5", &scope_only), -2);
        assert_eq!(rules.score("composer-1-5", &autonomy_only), -3);
    }
}
