//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI arguments for study-assistant
#[derive(Parser, Debug)]
#[command(name = "study-assistant")]
#[command(author, version, about = "Study aids from a local Ollama model")]
#[command(long_about = r#"
Study Assistant turns your notes into study aids using a locally hosted model.

Emotion analysis, concept maps and quizzes always produce a result: when the
model server is unreachable or its answer cannot be understood, a built-in
heuristic answer is returned instead. Study guides have no such fallback.

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. ./study-assistant.toml     Project-level config
3. ~/.config/study-assistant/config.toml   Global config

Example:
  study-assistant status
  study-assistant guide --file notes/chapter3.md
  study-assistant emotion "I'm so frustrated with recursion"
  cat lecture.txt | study-assistant --output json quiz
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Model to use (overrides configuration)
    #[arg(short, long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Model server address (overrides configuration)
    #[arg(long, global = true, value_name = "URL")]
    pub host: Option<String>,

    /// Output format (overrides configuration)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether the model server is reachable
    Status,
    /// List models installed on the server
    Models,
    /// Write a study guide for the given material
    Guide(TextInput),
    /// Analyze how the learner is feeling
    Emotion(TextInput),
    /// Build a concept map of the main ideas
    Concepts(TextInput),
    /// Generate multiple-choice questions
    Quiz(TextInput),
}

/// Where the input text comes from.
///
/// With neither a positional text nor `--file`, the text is read from stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct TextInput {
    /// The text itself
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
