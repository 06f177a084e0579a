pub mod scenario;

use crate::catalog::Catalog;
use crate::error::{PickerError, Result};
use crate::types::{Confidence, Score};
use chrono::Utc;
use scenario::{Expectation, Scenario};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const REPORT_DIR: &str = ".picker/reports";

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub file: String,
    pub name: String,
    pub winner: String,
    pub runner_up: String,
    pub confidence: Confidence,
    pub margin: Score,
    pub reason: String,
    /// Human-readable description of each unmet expectation.
    pub failures: Vec<String>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    pub version: String,
    pub generated_at: String,
    pub catalog_fingerprint: String,
    pub outcomes: Vec<ScenarioOutcome>,
    pub passed: usize,
    pub failed: usize,
}

impl EvalReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

pub fn evaluate(catalog: &Catalog, files: &[PathBuf]) -> Result<EvalReport> {
    let engine = catalog.engine();
    let lineup = catalog.lineup_candidates()?;
    let mut outcomes = Vec::new();

    for file in files {
        for scenario in scenario::load_scenarios(file)? {
            catalog.validate_answers(&scenario.answers).map_err(|e| {
                PickerError::ScenarioParse(format!(
                    "{} ({}): {}",
                    file.display(),
                    scenario.name,
                    e
                ))
            })?;
            let recommendation = engine.recommend(&lineup, &scenario.answers)?;
            let mut outcome = ScenarioOutcome {
                file: file.display().to_string(),
                name: scenario.name.clone(),
                winner: recommendation.winner.id,
                runner_up: recommendation.runner_up.id,
                confidence: recommendation.confidence,
                margin: recommendation.margin,
                reason: recommendation.reason,
                failures: Vec::new(),
            };
            outcome.failures = check_expectation(&scenario, &outcome);
            if !outcome.passed() {
                tracing::debug!(scenario = %outcome.name, failures = ?outcome.failures, "scenario mismatch");
            }
            outcomes.push(outcome);
        }
    }

    let failed = outcomes.iter().filter(|outcome| !outcome.passed()).count();
    Ok(EvalReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated_at: Utc::now().to_rfc3339(),
        catalog_fingerprint: catalog.fingerprint()?,
        passed: outcomes.len() - failed,
        failed,
        outcomes,
    })
}

fn check_expectation(scenario: &Scenario, outcome: &ScenarioOutcome) -> Vec<String> {
    let Some(Expectation {
        winner,
        runner_up,
        confidence,
    }) = &scenario.expect
    else {
        return Vec::new();
    };

    let mut failures = Vec::new();
    if let Some(expected) = winner {
        if *expected != outcome.winner {
            failures.push(format!("winner: expected {expected}, got {}", outcome.winner));
        }
    }
    if let Some(expected) = runner_up {
        if *expected != outcome.runner_up {
            failures.push(format!(
                "runner_up: expected {expected}, got {}",
                outcome.runner_up
            ));
        }
    }
    if let Some(expected) = confidence {
        if *expected != outcome.confidence {
            failures.push(format!(
                "confidence: expected {expected}, got {}",
                outcome.confidence
            ));
        }
    }
    failures
}

pub fn write_report(root: &Path, report: &EvalReport) -> Result<PathBuf> {
    let dir = root.join(REPORT_DIR);
    fs::create_dir_all(&dir).map_err(PickerError::Io)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let out_path = dir.join(format!("eval-{stamp}.json"));
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&out_path, json).map_err(PickerError::Io)?;
    Ok(out_path)
}
