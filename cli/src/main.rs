//! CLI entrypoint for ai-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use council_application::{
    ConsultParams, RunConsultationError, RunConsultationInput, RunConsultationUseCase,
};
use council_domain::{OutputFormat, ProviderKey, ProviderRegistry, Question};
use council_infrastructure::{
    ConfigLoader, CouncilInvoker, FileConfig, HostEnvironment, ProviderCatalog, SystemEnvironment,
};
use council_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Run settings after CLI flags are layered over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunSettings {
    params: ConsultParams,
    selection: Option<Vec<ProviderKey>>,
    format: OutputFormat,
}

impl RunSettings {
    fn resolve(cli: &Cli, config: &FileConfig) -> Result<Self> {
        let mut params = config.consultation.to_params();
        if let Some(rounds) = cli.rounds {
            params = params.with_rounds(rounds);
        }
        if let Some(timeout) = cli.call_timeout() {
            params = params.with_call_timeout(timeout);
        }
        params.validate()?;

        let selection = match cli.agent_keys()? {
            Some(keys) => Some(keys),
            None => config.consultation.agent_keys()?,
        };

        let format = cli
            .output_format()
            .or(config.output.format)
            .unwrap_or_default();

        Ok(Self {
            params,
            selection,
            format,
        })
    }
}

/// Reject agent keys the registry does not know, before anything runs
fn check_selection(registry: &ProviderRegistry, selection: Option<&[ProviderKey]>) -> Result<()> {
    let Some(keys) = selection else {
        return Ok(());
    };

    let unknown = registry.unknown_keys(keys);
    if !unknown.is_empty() {
        let unknown: Vec<_> = unknown.iter().map(|k| k.as_str()).collect();
        let known: Vec<_> = registry.keys().map(|k| k.as_str()).collect();
        bail!(
            "Unknown agent(s): {}. Known agents: {}",
            unknown.join(", "),
            known.join(", ")
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stderr keeps stdout clean for JSON
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    debug!("Loaded config: {:?}", config);

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let env: Arc<dyn HostEnvironment> = Arc::new(SystemEnvironment);
    let catalog = ProviderCatalog::builtin().with_overrides(&config.providers)?;
    let registry = catalog.build(env.as_ref());

    if cli.list_agents {
        print!(
            "{}",
            ConsoleFormatter::format_status_listing(&registry.statuses())
        );
        return Ok(());
    }

    let question = match cli.question.as_deref() {
        Some(q) => Question::parse(q)?,
        None => bail!("A question is required. Use --list-agents to see available agents."),
    };

    let settings = RunSettings::resolve(&cli, &config)?;
    check_selection(&registry, settings.selection.as_deref())?;

    info!("Starting ai-council");

    let mut input = RunConsultationInput::new(question, registry).with_params(settings.params);
    if let Some(keys) = settings.selection {
        input = input.with_selection(keys);
    }

    let use_case = RunConsultationUseCase::new(Arc::new(CouncilInvoker::new(env)));

    // Text mode prints each round as it lands; JSON mode prints once at the end
    let result = match (settings.format, cli.quiet) {
        (OutputFormat::Text, true) => use_case.execute_with_progress(input, &SimpleProgress).await,
        (OutputFormat::Text, false) => {
            let progress = ProgressReporter::new(true);
            use_case.execute_with_progress(input, &progress).await
        }
        (OutputFormat::Json, true) => use_case.execute(input).await,
        (OutputFormat::Json, false) => {
            let progress = ProgressReporter::new(false);
            use_case.execute_with_progress(input, &progress).await
        }
    };

    match result {
        Ok(report) => {
            match settings.format {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_summary(&report)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&report)),
            }
            Ok(())
        }
        Err(e @ RunConsultationError::NoParticipants) => {
            match settings.format {
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_error_json(&e.to_string()))
                }
                OutputFormat::Text => eprintln!("Error: {}", e),
            }
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{Invocation, ProcessCommand, Provider};
    use std::time::Duration;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ai-council").chain(args.iter().copied())).unwrap()
    }

    fn config(toml_str: &str) -> FileConfig {
        toml::from_str(toml_str).unwrap()
    }

    fn registry() -> ProviderRegistry {
        ProviderRegistry::new(["claude", "gemini"].map(|key| {
            Provider::new(
                key,
                key,
                Invocation::Process(ProcessCommand::new(key)),
                true,
            )
        }))
    }

    #[test]
    fn test_defaults_without_flags_or_config() {
        let settings = RunSettings::resolve(&cli(&["Q"]), &FileConfig::default()).unwrap();

        assert_eq!(settings.params, ConsultParams::default());
        assert!(settings.selection.is_none());
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_values_used_when_flags_absent() {
        let config = config(
            r#"
[consultation]
rounds = 3
timeout_secs = 10
agents = ["gemini"]

[output]
format = "json"
"#,
        );

        let settings = RunSettings::resolve(&cli(&["Q"]), &config).unwrap();

        assert_eq!(settings.params.rounds, 3);
        assert_eq!(settings.params.call_timeout, Duration::from_secs(10));
        assert_eq!(settings.selection, Some(vec![ProviderKey::new("gemini")]));
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_flags_override_config() {
        let config = config(
            r#"
[consultation]
rounds = 3
timeout_secs = 10
agents = ["gemini"]

[output]
format = "json"
"#,
        );

        let settings = RunSettings::resolve(
            &cli(&["-r", "1", "-t", "5", "-f", "text", "-a", "claude", "--", "Q"]),
            &config,
        )
        .unwrap();

        assert_eq!(settings.params.rounds, 1);
        assert_eq!(settings.params.call_timeout, Duration::from_secs(5));
        assert_eq!(settings.selection, Some(vec![ProviderKey::new("claude")]));
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_malformed_config_agent_never_widens_selection() {
        let config = config("[consultation]\nagents = [\"gem ini\"]\n");

        assert!(!config.validate().is_empty());
        assert!(RunSettings::resolve(&cli(&["Q"]), &config).is_err());
    }

    #[test]
    fn test_unknown_agent_rejected() {
        let registry = registry();
        let keys = vec![ProviderKey::new("claude"), ProviderKey::new("grok")];

        let err = check_selection(&registry, Some(keys.as_slice())).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unknown agent(s): grok. Known agents: claude, gemini"
        );
    }

    #[test]
    fn test_known_agents_accepted() {
        let registry = registry();
        let keys = vec![ProviderKey::new("gemini")];

        assert!(check_selection(&registry, Some(keys.as_slice())).is_ok());
        assert!(check_selection(&registry, None).is_ok());
    }
}
