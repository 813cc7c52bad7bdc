use crate::commands::{run_answer_validate, run_template_inspect, run_template_validate};
use clap::{Args, Parser, Subcommand};
use field_checklist::config::{AppConfig, OutputFormat};
use field_checklist::error::AppError;
use field_checklist::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "field-checklist",
    about = "Validate inspection checklist templates and the answers recorded against them",
    version
)]
struct Cli {
    /// Report format (text or json). Overrides CHECKLIST_OUTPUT.
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Work with checklist templates
    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },
    /// Work with recorded answers
    Answer {
        #[command(subcommand)]
        command: AnswerCommand,
    },
}

#[derive(Subcommand, Debug)]
enum TemplateCommand {
    /// Decode a template file and report every structural violation
    Validate(TemplateArgs),
    /// List each question with its kind and derived answer keys
    Inspect(TemplateArgs),
}

#[derive(Subcommand, Debug)]
enum AnswerCommand {
    /// Validate answer files against a template
    Validate(AnswerValidateArgs),
}

#[derive(Args, Debug)]
pub(crate) struct TemplateArgs {
    /// Path to the template JSON file
    pub(crate) path: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct AnswerValidateArgs {
    /// Template the answers were recorded against
    #[arg(long)]
    pub(crate) template: PathBuf,
    /// One or more answer JSON files
    #[arg(required = true)]
    pub(crate) answers: Vec<PathBuf>,
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(format) = cli.format {
        config.output = format;
    }

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, format = ?config.output, "field checklist starting");

    match cli.command {
        Command::Template {
            command: TemplateCommand::Validate(args),
        } => run_template_validate(args, &config),
        Command::Template {
            command: TemplateCommand::Inspect(args),
        } => run_template_inspect(args, &config),
        Command::Answer {
            command: AnswerCommand::Validate(args),
        } => run_answer_validate(args, &config),
    }
}
