//! CLI entrypoint for Study Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use study_application::{
    ModelGateway, NoProgress, ProgressNotifier, StudyAssistant,
};
use study_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, OllamaLlmGateway, Severity,
};
use study_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress, TextInput,
};
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Results go to stdout, so logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    info!("Starting Study Assistant");

    let config = load_config(&cli)?;
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!("config: {}", issue),
            Severity::Warning => warn!("config: {}", issue),
        }
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli.output.unwrap_or(match config.output.format {
        FileOutputFormat::Text => OutputFormat::Text,
        FileOutputFormat::Json => OutputFormat::Json,
    });

    // === Dependency Injection ===
    let backend = Arc::new(
        OllamaLlmGateway::with_timeout(&config.ollama.host, config.ollama.timeout())
            .context("failed to set up the HTTP client")?,
    );
    let gateway = Arc::new(ModelGateway::new(backend, config.ollama.model()));

    let progress: Arc<dyn ProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        // No spinner when stderr is redirected
        Arc::new(SimpleProgress)
    };

    let assistant = StudyAssistant::new(gateway)
        .with_params(config.generation.to_generation_params())
        .with_progress(progress);

    let output = match command {
        Command::Status => {
            let connected = assistant.gateway().check_connection().await;
            let model = assistant.gateway().model();
            match format {
                OutputFormat::Text => {
                    ConsoleFormatter::format_status(connected, &config.ollama.host, &model)
                }
                OutputFormat::Json => ConsoleFormatter::format_json(&serde_json::json!({
                    "host": config.ollama.host,
                    "connected": connected,
                    "model": model,
                })),
            }
        }
        Command::Models => {
            let models = assistant.gateway().list_models().await;
            match format {
                OutputFormat::Text => {
                    ConsoleFormatter::format_models(&models, &assistant.gateway().model())
                }
                OutputFormat::Json => ConsoleFormatter::format_json(&models),
            }
        }
        Command::Guide(input) => {
            let text = read_input(input).await?;
            let guide = assistant
                .generate_study_guide(&text)
                .await
                .context("could not generate a study guide")?;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_guide(&guide),
                OutputFormat::Json => ConsoleFormatter::format_json(&guide),
            }
        }
        Command::Emotion(input) => {
            let text = read_input(input).await?;
            let analysis = assistant.analyze_emotion(&text).await;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_emotion(&analysis),
                OutputFormat::Json => ConsoleFormatter::format_json(&analysis),
            }
        }
        Command::Concepts(input) => {
            let text = read_input(input).await?;
            let nodes = assistant.generate_concept_map(&text).await;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_concepts(&nodes),
                OutputFormat::Json => ConsoleFormatter::format_json(&nodes),
            }
        }
        Command::Quiz(input) => {
            let text = read_input(input).await?;
            let questions = assistant.generate_quiz(&text).await;
            match format {
                OutputFormat::Text => ConsoleFormatter::format_quiz(&questions),
                OutputFormat::Json => ConsoleFormatter::format_json(&questions),
            }
        }
    };

    println!("{}", output.trim_end());

    Ok(())
}

/// Load configuration files and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };

    if let Some(model) = &cli.model {
        config.ollama.model = model.clone();
    }
    if let Some(host) = &cli.host {
        config.ollama.host = host.clone();
    }

    info!(
        "Using model '{}' at {}",
        config.ollama.model, config.ollama.host
    );
    Ok(config)
}

async fn read_input(input: &TextInput) -> Result<String> {
    let text = match (&input.text, &input.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_file(path).await?,
        (None, None) => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("failed to read text from stdin")?;
            buffer
        }
    };

    if text.trim().is_empty() {
        bail!("No input text. Pass it as an argument, with --file, or on stdin.");
    }
    Ok(text)
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}
