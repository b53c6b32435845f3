//! Provider catalog
//!
//! The built-in providers, optionally reshaped by `[providers.<key>]`
//! config tables, and the one-shot readiness probe that turns the catalog
//! into a [`ProviderRegistry`].
//!
//! | key          | name       | invocation                                   |
//! |--------------|------------|----------------------------------------------|
//! | `claude`     | Claude     | `claude -p <prompt>`                         |
//! | `gemini`     | Gemini     | `gemini -p <prompt>`                         |
//! | `codex`      | Codex      | `codex exec <prompt>`                        |
//! | `perplexity` | Perplexity | POST Perplexity responses API, preset `sonar` |

use super::environment::HostEnvironment;
use crate::config::{ConfigValidationError, FileProviderConfig, FileProvidersConfig};
use council_domain::{
    Invocation, ProcessCommand, Provider, ProviderKey, ProviderRegistry, RemoteEndpoint,
};
use tracing::debug;

pub const PERPLEXITY_URL: &str = "https://api.perplexity.ai/v1/responses";
pub const PERPLEXITY_PRESET: &str = "sonar";
pub const PERPLEXITY_KEY_ENV: &str = "PERPLEXITY_API_KEY";

/// A provider before its readiness has been probed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDefinition {
    pub key: ProviderKey,
    pub name: String,
    pub invocation: Invocation,
}

impl ProviderDefinition {
    pub fn new(key: &str, name: &str, invocation: Invocation) -> Self {
        Self {
            key: ProviderKey::new(key),
            name: name.to_string(),
            invocation,
        }
    }

    /// Process providers need their program on `PATH`; remote providers
    /// need a non-blank credential variable.
    pub fn probe(&self, env: &dyn HostEnvironment) -> bool {
        match &self.invocation {
            Invocation::Process(command) => env.has_command(&command.program),
            Invocation::Remote(endpoint) => env.has_secret(&endpoint.api_key_env),
        }
    }
}

/// Ordered set of provider definitions
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
    definitions: Vec<ProviderDefinition>,
}

impl Default for ProviderCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProviderCatalog {
    pub fn builtin() -> Self {
        Self {
            definitions: vec![
                ProviderDefinition::new(
                    "claude",
                    "Claude",
                    Invocation::Process(ProcessCommand::new("claude").with_arg("-p")),
                ),
                ProviderDefinition::new(
                    "gemini",
                    "Gemini",
                    Invocation::Process(ProcessCommand::new("gemini").with_arg("-p")),
                ),
                ProviderDefinition::new(
                    "codex",
                    "Codex",
                    Invocation::Process(ProcessCommand::new("codex").with_arg("exec")),
                ),
                ProviderDefinition::new(
                    "perplexity",
                    "Perplexity",
                    Invocation::Remote(RemoteEndpoint::new(
                        PERPLEXITY_URL,
                        PERPLEXITY_PRESET,
                        PERPLEXITY_KEY_ENV,
                    )),
                ),
            ],
        }
    }

    pub fn definitions(&self) -> &[ProviderDefinition] {
        &self.definitions
    }

    pub fn get(&self, key: &ProviderKey) -> Option<&ProviderDefinition> {
        self.definitions.iter().find(|d| &d.key == key)
    }

    /// Apply `[providers.<key>]` tables.
    ///
    /// Existing keys are patched in place, new keys are appended in table
    /// order, and `enabled = false` removes the provider entirely.
    pub fn with_overrides(
        mut self,
        overrides: &FileProvidersConfig,
    ) -> Result<Self, ConfigValidationError> {
        for (raw_key, config) in overrides {
            let key = ProviderKey::parse(raw_key).map_err(|e| invalid(raw_key, e.to_string()))?;

            if !config.enabled {
                debug!("Provider {} disabled by config", key);
                self.definitions.retain(|d| d.key != key);
                continue;
            }

            match self.definitions.iter_mut().find(|d| d.key == key) {
                Some(existing) => apply_override(existing, config)?,
                None => {
                    debug!("Provider {} added by config", key);
                    self.definitions.push(new_definition(key, config)?);
                }
            }
        }
        Ok(self)
    }

    /// Probe every definition once and freeze the result
    pub fn build(&self, env: &dyn HostEnvironment) -> ProviderRegistry {
        let providers: Vec<Provider> = self
            .definitions
            .iter()
            .map(|definition| {
                let available = definition.probe(env);
                debug!(
                    "Provider {} ({}): {}",
                    definition.key,
                    definition.name,
                    if available { "ready" } else { "not ready" }
                );
                Provider::new(
                    definition.key.clone(),
                    definition.name.clone(),
                    definition.invocation.clone(),
                    available,
                )
            })
            .collect();

        ProviderRegistry::new(providers)
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> ConfigValidationError {
    ConfigValidationError::InvalidProvider {
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn process_command(
    key: &ProviderKey,
    command: &[String],
) -> Result<ProcessCommand, ConfigValidationError> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| invalid(key.as_str(), "command cannot be empty"))?;
    Ok(ProcessCommand::new(program.clone()).with_args(args.iter().cloned()))
}

fn apply_override(
    definition: &mut ProviderDefinition,
    config: &FileProviderConfig,
) -> Result<(), ConfigValidationError> {
    let key = definition.key.clone();

    if let Some(name) = &config.name {
        definition.name = name.clone();
    }

    if let Some(command) = &config.command {
        definition.invocation = Invocation::Process(process_command(&key, command)?);
    } else if let Some(url) = &config.endpoint {
        // Switching a process provider to HTTP needs the remote fields spelled out
        let (preset, api_key_env) = match &definition.invocation {
            Invocation::Remote(current) => (
                config.preset.clone().unwrap_or_else(|| current.preset.clone()),
                config
                    .api_key_env
                    .clone()
                    .unwrap_or_else(|| current.api_key_env.clone()),
            ),
            Invocation::Process(_) => remote_fields(&key, config)?,
        };
        definition.invocation = Invocation::Remote(RemoteEndpoint::new(url, preset, api_key_env));
    } else if let Invocation::Remote(current) = &mut definition.invocation {
        if let Some(preset) = &config.preset {
            current.preset = preset.clone();
        }
        if let Some(api_key_env) = &config.api_key_env {
            current.api_key_env = api_key_env.clone();
        }
    } else if config.preset.is_some() || config.api_key_env.is_some() {
        return Err(invalid(key.as_str(), "preset and api_key_env require an endpoint"));
    }

    Ok(())
}

fn remote_fields(
    key: &ProviderKey,
    config: &FileProviderConfig,
) -> Result<(String, String), ConfigValidationError> {
    let preset = config
        .preset
        .clone()
        .ok_or_else(|| invalid(key.as_str(), "endpoint requires preset"))?;
    let api_key_env = config
        .api_key_env
        .clone()
        .ok_or_else(|| invalid(key.as_str(), "endpoint requires api_key_env"))?;
    Ok((preset, api_key_env))
}

fn new_definition(
    key: ProviderKey,
    config: &FileProviderConfig,
) -> Result<ProviderDefinition, ConfigValidationError> {
    let invocation = match (&config.command, &config.endpoint) {
        (Some(command), None) => Invocation::Process(process_command(&key, command)?),
        (None, Some(url)) => {
            let (preset, api_key_env) = remote_fields(&key, config)?;
            Invocation::Remote(RemoteEndpoint::new(url, preset, api_key_env))
        }
        _ => {
            return Err(invalid(
                key.as_str(),
                "new providers need exactly one of command or endpoint",
            ));
        }
    };

    Ok(ProviderDefinition {
        name: config.name.clone().unwrap_or_else(|| key.to_string()),
        key,
        invocation,
    })
}
