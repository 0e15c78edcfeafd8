//! Promptsmith CLI: a thin command-line boundary over the prompt engine.
//!
//! Each command either prints plain text (default) or, with `--json`, the
//! `{success, data, error}` envelope. Engine errors are translated into the envelope here and
//! nowhere else.

mod commands;
mod envelope;
mod render;
pub mod validate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use promptsmith::EngineError;
use thiserror::Error;

pub use commands::{execute, Output};
pub use envelope::{Envelope, ErrorBody};

/// Application name used for the XDG config directory.
pub const APP_NAME: &str = "promptsmith";

#[derive(Parser, Debug)]
#[command(name = "promptsmith")]
#[command(about = "Promptsmith: generate, optimise and analyse prompts for text, image, video and search models")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Print the {success, data, error} envelope as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// With --json, pretty-print (multi-line)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Read knowledge documents from this directory instead of the built-in ones
    #[arg(long, global = true, value_name = "DIR")]
    pub knowledge_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate extended, standard and minimal prompts for a goal
    Generate(GenerateArgs),
    /// Detect issues in a prompt and rewrite it for the target model
    Optimize(OptimizeArgs),
    /// Detect issues in a prompt without rewriting it
    Analyze(AnalyzeArgs),
    /// Match, list or show prompt recipes
    Recipe(RecipeArgs),
    /// List models, show their rules or compare them
    Models(ModelsArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Target model slug (e.g. claude-4.5, gpt-5.2, nano-banana)
    #[arg(short, long, value_name = "SLUG")]
    pub model: String,
    /// Task type; inferred from the goal when omitted (e.g. code-generation, translation)
    #[arg(long, value_name = "TYPE")]
    pub task_type: Option<String>,
    /// Background information for the model
    #[arg(long, value_name = "TEXT")]
    pub context: Option<String>,
    /// formal, casual, technical or concise
    #[arg(long, value_name = "TONE")]
    pub tone: Option<String>,
    /// Explicit constraint (repeatable)
    #[arg(long = "constraint", value_name = "TEXT")]
    pub constraints: Vec<String>,
    /// Few-shot example (repeatable)
    #[arg(long = "example", value_name = "TEXT")]
    pub examples: Vec<String>,
    /// Only this variant: extended, standard or minimal
    #[arg(long = "version", value_name = "KIND")]
    pub variant: Option<String>,
    /// What the prompt should achieve
    #[arg(required = true, value_name = "GOAL")]
    pub goal: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// Target model slug
    #[arg(short, long, value_name = "SLUG")]
    pub model: String,
    /// Problem noticed with the prompt's results (repeatable)
    #[arg(long = "issue", value_name = "TEXT")]
    pub issues: Vec<String>,
    /// Prompt text, or `-` to read it from stdin
    #[arg(required = true, value_name = "PROMPT")]
    pub prompt: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Target model slug
    #[arg(short, long, value_name = "SLUG")]
    pub model: String,
    /// Prompt text, or `-` to read it from stdin
    #[arg(required = true, value_name = "PROMPT")]
    pub prompt: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RecipeArgs {
    #[command(subcommand)]
    pub sub: RecipeCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RecipeCommand {
    /// Best recipe for a free-text description
    Match {
        /// List every recipe above the threshold instead of the best one
        #[arg(long)]
        all: bool,
        /// Minimum confidence for --all
        #[arg(long, default_value_t = promptsmith::recipes::DEFAULT_THRESHOLD)]
        threshold: f64,
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
    },
    /// List recipes, optionally only those supporting a model
    List {
        #[arg(long, value_name = "SLUG")]
        model: Option<String>,
    },
    /// Show one recipe
    Show { slug: String },
}

#[derive(clap::Args, Debug, Clone)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub sub: ModelsCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ModelsCommand {
    /// List registered models
    List {
        /// llm, image, video or search
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// Show the extracted rules for one model
    Rules { slug: String },
    /// Compare models on literalness, structure and temperature
    Compare,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Config(#[from] config::LoadError),
    #[error("read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Engine(e) => e.code(),
            CliError::Validation(_) => "VALIDATION_ERROR",
            CliError::Config(_) => "CONFIG_ERROR",
            CliError::Stdin(_) => "READ_ERROR",
            CliError::Serialize(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            CliError::Engine(e) => e.status_hint(),
            CliError::Validation(_) => 422,
            CliError::Config(_) | CliError::Stdin(_) | CliError::Serialize(_) => 500,
        }
    }
}

/// Executes `cli` and prints the outcome. Non-zero exit status on any error.
pub fn run(cli: &Cli, settings: Result<config::Settings, config::LoadError>) -> ExitCode {
    let outcome = settings
        .map_err(CliError::from)
        .and_then(|settings| execute(cli, &settings));

    if let Err(e) = &outcome {
        tracing::warn!(code = e.code(), error = %e, "command failed");
    }

    if cli.json {
        let envelope = match &outcome {
            Ok(out) => Envelope::ok(out.data.clone()),
            Err(e) => Envelope::err(e),
        };
        match envelope.to_json(cli.pretty) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("promptsmith: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match &outcome {
            Ok(out) => println!("{}", out.text),
            Err(e) => eprintln!("error [{}]: {e}", e.code()),
        }
    }

    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
