use super::RuleTable;
use crate::types::{BaseRule, InteractionRule, Score};

type Row = (&'static str, &'static str, Score);

const GEMINI_FLASH: &[Row] = &[
    ("task", "coding", 2),
    ("task", "reasoning", 1),
    ("task", "vision", 3),
    ("scope", "targeted", 3),
    ("stakes", "production", 3),
    ("stakes", "prototype", -1),
    ("priority", "accuracy", 3),
    ("priority", "speed", -1),
    ("autonomy", "targeted", 3),
    ("autonomy", "drive", -3),
];

const SONNET: &[Row] = &[
    ("task", "coding", 2),
    ("task", "reasoning", 2),
    ("task", "writing", 3),
    ("task", "analysis", 3),
    ("scope", "multifile", 3),
    ("scope", "architecture", 3),
    ("stakes", "production", 2),
    ("stakes", "internal", 2),
    ("priority", "balance", 2),
    ("priority", "accuracy", 2),
    ("autonomy", "gaps", 3),
    ("autonomy", "drive", 1),
];

const OPUS: &[Row] = &[
    ("task", "coding", 3),
    ("task", "reasoning", 4),
    ("task", "analysis", 3),
    ("task", "writing", 2),
    ("scope", "architecture", 4),
    ("scope", "multifile", 2),
    ("scope", "autonomous", 1),
    ("stakes", "critical", 5),
    ("stakes", "production", 2),
    ("stakes", "prototype", -2),
    ("priority", "accuracy", 4),
    ("priority", "speed", -3),
    ("autonomy", "gaps", 2),
    ("autonomy", "drive", 2),
];

const COMPOSER_1: &[Row] = &[
    ("task", "coding", 3),
    ("scope", "targeted", 5),
    ("scope", "multifile", -2),
    ("scope", "autonomous", -4),
    ("stakes", "production", 2),
    ("priority", "speed", 3),
    ("autonomy", "targeted", 5),
    ("autonomy", "drive", -4),
];

const COMPOSER_1_5: &[Row] = &[
    ("task", "coding", 3),
    ("scope", "autonomous", 5),
    ("scope", "multifile", 3),
    ("scope", "targeted", -2),
    ("stakes", "prototype", 2),
    ("stakes", "internal", 2),
    ("stakes", "critical", -3),
    ("priority", "speed", 2),
    ("priority", "accuracy", -1),
    ("autonomy", "drive", 5),
    ("autonomy", "gaps", 2),
    ("autonomy", "targeted", -3),
];

pub(super) fn rule_table() -> RuleTable {
    let mut table = RuleTable::default();
    for (candidate, rows) in [
        ("gemini-flash", GEMINI_FLASH),
        ("sonnet-4.6", SONNET),
        ("opus-4.6", OPUS),
        ("composer-1", COMPOSER_1),
        ("composer-1-5", COMPOSER_1_5),
    ] {
        for (dimension, option, weight) in rows {
            table.add_rule(candidate, BaseRule::new(dimension, option, *weight));
        }
    }

    // Autonomous scope and drive autonomy describe the same thing.
    table.add_interaction(InteractionRule::new(
        &[("scope", "autonomous"), ("autonomy", "drive")],
        "composer-1-5",
        -2,
    ));
    // Hard task run end-to-end wants the frontier model.
    table.add_interaction(InteractionRule::new(
        &[("stakes", "critical"), ("scope", "autonomous")],
        "opus-4.6",
        2,
    ));
    table.add_interaction(InteractionRule::new(
        &[("stakes", "critical"), ("priority", "accuracy")],
        "opus-4.6",
        2,
    ));
    table.add_interaction(InteractionRule::new(
        &[("stakes", "critical"), ("priority", "accuracy")],
        "composer-1-5",
        -1,
    ));

    table
}
