use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One decision dimension and its closed set of options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.id == id)
    }

    pub fn has_option(&self, id: &str) -> bool {
        self.option(id).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A rankable item. `why` is keyed by option id, independent of dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub when_wrong: String,
    #[serde(default)]
    pub why: BTreeMap<String, String>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tagline: String::new(),
            when_wrong: String::new(),
            why: BTreeMap::new(),
        }
    }

    pub fn with_why(mut self, option: impl Into<String>, sentence: impl Into<String>) -> Self {
        self.why.insert(option.into(), sentence.into());
        self
    }

    /// Explanation for an option. Empty entries count as missing.
    pub fn why_for(&self, option: &str) -> Option<&str> {
        self.why
            .get(option)
            .map(String::as_str)
            .filter(|sentence| !sentence.is_empty())
    }
}
