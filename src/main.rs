mod cli;

use clap::Parser;
use model_picker::config;
use model_picker::error::PickerError;
use model_picker::evaluate::{self, scenario};
use model_picker::report::{self, OutputFormat, RecommendationReport};
use model_picker::session;
use model_picker::types::AnswerSet;
use model_picker::Catalog;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const MISMATCHES: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn parse_answers(catalog: &Catalog, raw: &[String], lenient: bool) -> Result<AnswerSet, PickerError> {
    let answers = AnswerSet::from_pairs(raw)?;
    if !lenient {
        catalog.validate_answers(&answers)?;
    }
    Ok(answers)
}

fn print_recommendation(
    catalog: &Catalog,
    answers: &AnswerSet,
    format: &cli::ReportFormat,
) -> Result<(), PickerError> {
    let lineup = catalog.lineup_candidates()?;
    let engine = catalog.engine();
    for candidate in &lineup {
        tracing::debug!(
            candidate = %candidate.id,
            score = engine.score(&candidate.id, answers),
            "scored candidate"
        );
    }
    let recommendation = engine.recommend(&lineup, answers)?;
    tracing::info!(
        winner = %recommendation.winner.id,
        runner_up = %recommendation.runner_up.id,
        margin = recommendation.margin,
        "recommendation ready"
    );
    let rendered = report::render_recommendation(
        &RecommendationReport {
            answers,
            recommendation: &recommendation,
        },
        output_format(format),
    )?;
    println!("{rendered}");
    Ok(())
}

fn run(cli: cli::Cli) -> Result<i32, PickerError> {
    if !cli.root.exists() {
        return Err(PickerError::PathNotFound(cli.root.display().to_string()));
    }
    let catalog = config::load_catalog(&cli.root)?;

    match cli.command {
        cli::Commands::Questions(cmd) => {
            let rendered = report::render_questions(&catalog.questions, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            if !cmd.lenient && catalog.candidate(&cmd.candidate).is_none() {
                return Err(PickerError::UnknownCandidate(cmd.candidate));
            }
            let answers = parse_answers(&catalog, &cmd.answers, cmd.lenient)?;
            let score = catalog.engine().score(&cmd.candidate, &answers);
            println!("{}: {}", cmd.candidate, score);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Recommend(cmd) => {
            let answers = parse_answers(&catalog, &cmd.answers, cmd.lenient)?;
            print_recommendation(&catalog, &answers, &cmd.format)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Ask(cmd) => {
            let stdin = std::io::stdin();
            let mut stderr = std::io::stderr();
            let answers = session::run_interactive(&catalog.questions, stdin.lock(), &mut stderr)?;
            print_recommendation(&catalog, &answers, &cmd.format)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Evaluate(cmd) => {
            let files = scenario::discover(&cmd.path)?;
            if files.is_empty() {
                tracing::warn!(path = %cmd.path.display(), "no scenario files found");
            }
            let eval_report = evaluate::evaluate(&catalog, &files)?;
            tracing::info!(
                files = files.len(),
                passed = eval_report.passed,
                failed = eval_report.failed,
                "evaluation finished"
            );
            let rendered = report::render_evaluation(&eval_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if cmd.save {
                let path = evaluate::write_report(&cli.root, &eval_report)?;
                println!("report file: {}", path.display());
            }

            if eval_report.has_failures() {
                Ok(exit_code::MISMATCHES)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_invalid_input() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
