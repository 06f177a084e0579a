use super::RecommendationReport;
use crate::evaluate::EvalReport;
use crate::types::Question;

pub fn recommendation_markdown(report: &RecommendationReport<'_>) -> String {
    let recommendation = report.recommendation;
    let winner = &recommendation.winner;
    let runner_up = &recommendation.runner_up;

    let mut output = String::new();
    output.push_str("# Recommendation\n\n");
    output.push_str(&format!("## {}", winner.name));
    if !winner.tagline.is_empty() {
        output.push_str(&format!(" ({})", winner.tagline));
    }
    output.push_str("\n\n");
    output.push_str(&format!(
        "Confidence: {} (margin {})\n\n",
        recommendation.confidence, recommendation.margin
    ));
    output.push_str(&format!("{}\n\n", recommendation.reason));
    if !winner.when_wrong.is_empty() {
        output.push_str(&format!("When I was wrong: {}\n\n", winner.when_wrong));
    }

    output.push_str(&format!("Also consider: {}", runner_up.name));
    if !runner_up.tagline.is_empty() {
        output.push_str(&format!(" ({})", runner_up.tagline));
    }
    output.push_str("\n\n");

    output.push_str("## Answers\n\n");
    if report.answers.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for (dimension, option) in report.answers.iter() {
            output.push_str(&format!("- {dimension}: {option}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Ranking\n\n");
    output.push_str("| # | candidate | score |\n|---|---|---|\n");
    for (index, ranked) in recommendation.ranking.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            index + 1,
            ranked.name,
            ranked.score
        ));
    }

    output
}

pub fn questions_markdown(questions: &[Question]) -> String {
    let mut output = String::new();
    output.push_str("# Questions\n");
    for question in questions {
        output.push_str(&format!("\n## {} ({})\n\n", question.text, question.id));
        for option in &question.options {
            match &option.description {
                Some(description) => output.push_str(&format!(
                    "- `{}` {}: {}\n",
                    option.id, option.label, description
                )),
                None => output.push_str(&format!("- `{}` {}\n", option.id, option.label)),
            }
        }
    }
    output
}

pub fn evaluation_markdown(report: &EvalReport) -> String {
    let mut output = String::new();
    output.push_str("# Evaluation Report\n\n");
    output.push_str(&format!(
        "Passed: {} / Failed: {}\n\nCatalog: {}\n\n",
        report.passed, report.failed, report.catalog_fingerprint
    ));

    output.push_str("## Scenarios\n\n");
    if report.outcomes.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for outcome in &report.outcomes {
        output.push_str(&format!(
            "- [{}] {}: {} over {} ({}, margin {})\n",
            if outcome.passed() { "pass" } else { "FAIL" },
            outcome.name,
            outcome.winner,
            outcome.runner_up,
            outcome.confidence,
            outcome.margin
        ));
        for failure in &outcome.failures {
            output.push_str(&format!("  - {failure}\n"));
        }
    }

    output
}
