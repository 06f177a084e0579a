use super::catalog::{Candidate, Question};
use super::scoring::{BaseRule, Condition, InteractionRule, Score};
use crate::catalog::Catalog;
use crate::scoring::RuleTable;
use serde::Deserialize;
use std::collections::BTreeMap;

/// On-disk shape of `picker.toml`. Every section is optional; a present
/// section replaces the built-in counterpart as a whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickerConfig {
    pub picker: Option<PickerSection>,
    pub questions: Option<Vec<Question>>,
    pub candidates: Option<Vec<Candidate>>,
    pub rules: Option<Vec<RuleEntry>>,
    pub interactions: Option<Vec<InteractionEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickerSection {
    pub reason_order: Option<Vec<String>>,
    pub lineup: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    pub candidate: String,
    pub dimension: String,
    pub option: String,
    pub weight: Score,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InteractionEntry {
    pub candidate: String,
    pub weight: Score,
    /// dimension -> option; all must match.
    #[serde(default)]
    pub when: BTreeMap<String, String>,
}

impl PickerConfig {
    /// Overlays this config on `base`. The result still needs `Catalog::validate`.
    pub fn apply_to(self, mut base: Catalog) -> Catalog {
        if let Some(section) = self.picker {
            if let Some(reason_order) = section.reason_order {
                base.reason_order = reason_order;
            }
            if let Some(lineup) = section.lineup {
                base.lineup = lineup;
            }
        }
        if let Some(questions) = self.questions {
            base.questions = questions;
        }
        if let Some(candidates) = self.candidates {
            base.candidates = candidates;
        }
        if let Some(rules) = self.rules {
            let mut table = RuleTable {
                base: BTreeMap::new(),
                interactions: base.rules.interactions,
            };
            for entry in rules {
                table.add_rule(
                    &entry.candidate,
                    BaseRule {
                        dimension: entry.dimension,
                        option: entry.option,
                        weight: entry.weight,
                    },
                );
            }
            base.rules = table;
        }
        if let Some(interactions) = self.interactions {
            base.rules.interactions = interactions
                .into_iter()
                .map(|entry| InteractionRule {
                    when: entry
                        .when
                        .into_iter()
                        .map(|(dimension, option)| Condition { dimension, option })
                        .collect(),
                    candidate: entry.candidate,
                    weight: entry.weight,
                })
                .collect();
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnswerSet;

    #[test]
    fn parse_empty_config_keeps_builtin_catalog() {
        let cfg: PickerConfig = toml::from_str("").expect("empty config should parse");
        let catalog = cfg.apply_to(Catalog::builtin());
        catalog.validate().expect("builtin catalog should still validate");
        assert_eq!(catalog.lineup.len(), 5);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[picker]
reason_order = ["speed"]
lineup = ["fast", "slow"]

[[questions]]
id = "speed"
text = "How fast?"
options = [
  { id = "now", label = "Now" },
  { id = "later", label = "Later", description = "No rush" },
]

[[candidates]]
id = "fast"
name = "Fast Model"
[candidates.why]
now = "Answers immediately."

[[candidates]]
id = "slow"
name = "Slow Model"

[[rules]]
candidate = "fast"
dimension = "speed"
option = "now"
weight = 4

[[interactions]]
candidate = "slow"
weight = 1
when = { speed = "later" }
"#;

        let cfg: PickerConfig = toml::from_str(toml_str).expect("full config should parse");
        let catalog = cfg.apply_to(Catalog::builtin());
        catalog.validate().expect("custom catalog should validate");
        assert_eq!(catalog.questions.len(), 1);
        assert_eq!(catalog.reason_order, ["speed"]);

        let answers: AnswerSet = [("speed", "now")].into_iter().collect();
        let lineup = catalog.lineup_candidates().expect("lineup should resolve");
        let rec = catalog
            .engine()
            .recommend(&lineup, &answers)
            .expect("recommendation should succeed");
        assert_eq!(rec.winner.id, "fast");
        assert_eq!(rec.reason, "Answers immediately.");

        let later: AnswerSet = [("speed", "later")].into_iter().collect();
        assert_eq!(catalog.engine().score("slow", &later), 1);
    }

    #[test]
    fn replacing_rules_keeps_builtin_interactions() {
        let cfg: PickerConfig = toml::from_str(
            r#"
[[rules]]
candidate = "composer-1-5"
dimension = "scope"
option = "autonomous"
weight = 1
"#,
        )
        .expect("rules config should parse");
        let catalog = cfg.apply_to(Catalog::builtin());
        let answers: AnswerSet = [("scope", "autonomous"), ("autonomy", "drive")]
            .into_iter()
            .collect();
        assert_eq!(catalog.engine().score("composer-1-5", &answers), -1);
        assert_eq!(catalog.engine().score("opus-4.6", &answers), 0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = toml::from_str::<PickerConfig>(
            r#"
[picker]
linup = ["a", "b"]
"#,
        );
        assert!(result.is_err());
    }
}
