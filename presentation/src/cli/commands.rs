//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_domain::{DomainError, OutputFormat, ProviderKey};
use std::path::PathBuf;
use std::time::Duration;

/// Output format flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Each round as it completes, then a summary
    Text,
    /// The full report as one JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for ai-council
#[derive(Parser, Debug)]
#[command(name = "ai-council")]
#[command(author, version, about = "AI Council - ask several AI agents, then let them respond to each other")]
#[command(long_about = r#"
AI Council sends one question to several AI agents and runs a short discussion.

Round 1: every agent answers the question independently, in parallel.
Round 2+: every agent sees the latest answers and responds to them.

Agents are local CLIs (claude, gemini, codex) or remote APIs (perplexity).
An agent whose CLI is missing or whose API key is unset is skipped.

Configuration files are loaded from (in priority order):
1. AI_COUNCIL_* environment variables
2. --config <path>       Explicit config file
3. ./council.toml        Project-level config
4. ~/.config/ai-council/config.toml   Global config

Example:
  ai-council "Should this service use gRPC or REST?"
  ai-council -a claude gemini -r 3 "Review this error handling strategy"
  ai-council -f json "Tabs or spaces?" > council.json
  ai-council --list-agents
"#)]
pub struct Cli {
    /// The question to put to the council
    pub question: Option<String>,

    /// Agents to include (default: all available)
    #[arg(short, long, value_name = "KEY", num_args = 1..)]
    pub agents: Vec<String>,

    /// Number of discussion rounds [default: 2]
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,

    /// Timeout per agent call in seconds [default: 120]
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// List agents and their availability, then exit
    #[arg(short, long)]
    pub list_agents: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

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

impl Cli {
    /// `--agents` as provider keys, `None` when the flag was not given
    pub fn agent_keys(&self) -> Result<Option<Vec<ProviderKey>>, DomainError> {
        if self.agents.is_empty() {
            return Ok(None);
        }
        self.agents
            .iter()
            .map(|a| ProviderKey::parse(a.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.map(OutputFormat::from)
    }
}
