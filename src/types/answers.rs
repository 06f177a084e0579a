use crate::error::PickerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Chosen option per answered dimension. Unanswered dimensions are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.0.get(dimension).map(String::as_str)
    }

    pub fn is(&self, dimension: &str, option: &str) -> bool {
        self.get(dimension) == Some(option)
    }

    pub fn insert(&mut self, dimension: impl Into<String>, option: impl Into<String>) {
        self.0.insert(dimension.into(), option.into());
    }

    pub fn remove(&mut self, dimension: &str) -> Option<String> {
        self.0.remove(dimension)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builds an answer set from `dimension=option` pairs. Later pairs win.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, PickerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut answers = Self::new();
        for pair in pairs {
            let Answer { dimension, option } = pair.as_ref().parse()?;
            answers.insert(dimension, option);
        }
        Ok(answers)
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One `dimension=option` pair as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub dimension: String,
    pub option: String,
}

impl FromStr for Answer {
    type Err = PickerError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let Some((dimension, option)) = input.split_once('=') else {
            return Err(PickerError::InvalidAnswer(input.to_string()));
        };
        let (dimension, option) = (dimension.trim(), option.trim());
        if dimension.is_empty() || option.is_empty() {
            return Err(PickerError::InvalidAnswer(input.to_string()));
        }
        Ok(Self {
            dimension: dimension.to_string(),
            option: option.to_string(),
        })
    }
}
