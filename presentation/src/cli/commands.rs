//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the composed research context
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted output with section headers
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for research-scope
#[derive(Parser, Debug)]
#[command(name = "research-scope")]
#[command(author, version, about = "Scope a research query with LLM-generated follow-up questions")]
#[command(long_about = r#"
research-scope turns a raw research query into a structured research context.

The session has three steps:
1. Follow-up generation: the model proposes up to <breadth> clarifying questions
2. Answer collection: you answer each question (finish each answer with a blank line)
3. Composition: query and answers are merged into one context block for the
   deep-research stage, together with the breadth and depth parameters

Anything not given on the command line is prompted for interactively.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./scope.toml        Project-level config
3. ~/.config/research-scope/config.toml   Global config

The API key is read from OPENAI_API_KEY; OPENAI_BASE_URL and OPENAI_MODEL
override the endpoint and model.

Example:
  research-scope "can pigs fly"
  research-scope -b 5 -d 3 "viability of ammonia as marine fuel"
  research-scope --non-interactive -m o4-mini "state of solid-state batteries"
"#)]
pub struct Cli {
    /// The research query (prompted for interactively when omitted)
    pub query: Option<String>,

    /// Number of follow-up questions to request (recommended 2-10)
    #[arg(short, long, value_name = "N")]
    pub breadth: Option<usize>,

    /// Research depth for the downstream stage (recommended 1-5)
    #[arg(short, long, value_name = "N")]
    pub depth: Option<usize>,

    /// Model to use for question generation
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip every prompt: require the query as an argument and leave all
    /// follow-up questions unanswered
    #[arg(long)]
    pub non_interactive: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
