//! CLI entrypoint for research-scope
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use scope_application::ports::answer_input::AnswerInputPort;
use scope_application::{GenerationParams, RunScopingInput, RunScopingUseCase, SkipAllAnswers};
use scope_domain::{DEFAULT_BREADTH, DEFAULT_DEPTH, DomainError, Model, Query, ResearchParams};
use scope_infrastructure::{
    API_KEY_ENV, BASE_URL_ENV, ConfigLoader, DEFAULT_BASE_URL, MODEL_ENV,
    OpenAiGenerationGateway,
};
use scope_presentation::{
    Cli, ConsoleFormatter, GenerationSpinner, InteractiveAnswerInput, OutputFormat,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
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

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting research-scope");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let terminal = InteractiveAnswerInput::new();

    // Query: argument, or interactive multi-line prompt
    let query = match &cli.query {
        Some(q) => Query::try_new(q.clone()).ok_or(DomainError::EmptyQuery)?,
        None if cli.non_interactive => {
            bail!("Query is required in non-interactive mode")
        }
        None => terminal.prompt_query()?,
    };

    // Breadth/depth: flag > config > interactive prompt with lenient defaults
    let breadth = match cli.breadth {
        Some(b) if b > 0 => b,
        Some(_) => bail!("Breadth must be a positive integer"),
        None => match config.research.breadth {
            Some(b) => b,
            None if cli.non_interactive => DEFAULT_BREADTH,
            None => {
                let line =
                    terminal.prompt_line("Enter research breadth (recommended 2-10, default 4):")?;
                ResearchParams::parse_breadth(&line)
            }
        },
    };
    let depth = match cli.depth {
        Some(d) => d,
        None => match config.research.depth {
            Some(d) => d,
            None if cli.non_interactive => DEFAULT_DEPTH,
            None => {
                let line =
                    terminal.prompt_line("Enter research depth (recommended 1-5, default 2):")?;
                ResearchParams::parse_depth(&line)
            }
        },
    };
    let params = ResearchParams::new(breadth, depth);

    // Model: flag > environment > config > default
    let model: Model = cli
        .model
        .clone()
        .or_else(|| std::env::var(MODEL_ENV).ok())
        .or_else(|| config.generation.model.clone())
        .map(|s| s.parse().unwrap())
        .unwrap_or_default();

    let generation = GenerationParams::default()
        .with_model(model)
        .with_request_timeout(config.generation.request_timeout_secs.map(Duration::from_secs));

    // === Dependency Injection ===
    let api_key = std::env::var(API_KEY_ENV)
        .with_context(|| format!("{} must be set", API_KEY_ENV))?;
    let base_url = std::env::var(BASE_URL_ENV)
        .ok()
        .or_else(|| config.generation.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let gateway = Arc::new(
        OpenAiGenerationGateway::new(api_key, base_url)
            .with_request_timeout(generation.request_timeout)
            .context("Failed to build HTTP client")?,
    );

    let answer_input: Arc<dyn AnswerInputPort> = if cli.non_interactive {
        Arc::new(SkipAllAnswers)
    } else {
        Arc::new(terminal)
    };

    let use_case = RunScopingUseCase::new(gateway, answer_input);
    let input = RunScopingInput::new(query, params, generation);

    // Execute with or without the progress spinner
    let context = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let spinner = GenerationSpinner::new();
        use_case.execute_with_progress(input, &spinner).await?
    };

    // Hand off the composed context and parameters
    let output = match cli.output {
        OutputFormat::Text if cli.quiet => ConsoleFormatter::format_plain(&context),
        OutputFormat::Text => ConsoleFormatter::format(&context),
        OutputFormat::Json => ConsoleFormatter::format_json(&context),
    };

    println!("{}", output);

    Ok(())
}
