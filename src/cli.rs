use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "model-picker",
    version,
    about = "Pick the right AI model for a task from five quick questions"
)]
pub struct Cli {
    /// Directory holding picker.toml and .picker/
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the questions and their option ids
    Questions(QuestionsCommand),
    /// Score one candidate against a set of answers
    Score(ScoreCommand),
    /// Recommend a model for a set of answers
    Recommend(RecommendCommand),
    /// Answer the questions interactively, then recommend
    Ask(AskCommand),
    /// Run scenario files and check expected outcomes
    Evaluate(EvaluateCommand),
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub candidate: String,
    /// Answer as dimension=option; repeatable
    #[arg(short, long = "answer")]
    pub answers: Vec<String>,
    /// Accept unknown dimensions, options and candidates (they score zero)
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Args)]
pub struct RecommendCommand {
    /// Answer as dimension=option; repeatable
    #[arg(short, long = "answer")]
    pub answers: Vec<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Accept unknown dimensions and options (they score zero)
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Args)]
pub struct AskCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct EvaluateCommand {
    /// Scenario file or directory of *.toml scenario files
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Also write the JSON report under .picker/reports/
    #[arg(long)]
    pub save: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
