use crate::error::{PickerError, Result};
use crate::types::{AnswerSet, Confidence};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    #[serde(default)]
    scenario: Vec<Scenario>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default)]
    pub expect: Option<Expectation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expectation {
    pub winner: Option<String>,
    pub runner_up: Option<String>,
    pub confidence: Option<Confidence>,
}

/// Scenario files under `path`: the file itself, or every `*.toml` below a directory.
pub fn discover(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(PickerError::PathNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let is_toml = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if entry.file_type().is_file() && is_toml {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    let content = std::fs::read_to_string(path)?;
    let file: ScenarioFile = toml::from_str(&content)
        .map_err(|e| PickerError::ScenarioParse(format!("{}: {}", path.display(), e)))?;
    Ok(file.scenario)
}
