pub mod json;
pub mod md;

use crate::error::PickerError;
use crate::evaluate::EvalReport;
use crate::types::{AnswerSet, Question, Recommendation};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// A recommendation together with the answers that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport<'a> {
    pub answers: &'a AnswerSet,
    #[serde(flatten)]
    pub recommendation: &'a Recommendation,
}

pub fn render_recommendation(
    report: &RecommendationReport<'_>,
    format: OutputFormat,
) -> Result<String, PickerError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PickerError::Json),
        OutputFormat::Md => Ok(md::recommendation_markdown(report)),
    }
}

pub fn render_questions(questions: &[Question], format: OutputFormat) -> Result<String, PickerError> {
    match format {
        OutputFormat::Json => json::to_json(questions).map_err(PickerError::Json),
        OutputFormat::Md => Ok(md::questions_markdown(questions)),
    }
}

pub fn render_evaluation(report: &EvalReport, format: OutputFormat) -> Result<String, PickerError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PickerError::Json),
        OutputFormat::Md => Ok(md::evaluation_markdown(report)),
    }
}
