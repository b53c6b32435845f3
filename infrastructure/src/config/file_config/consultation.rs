//! Consultation configuration from TOML (`[consultation]` section)

use super::ConfigValidationError;
use council_application::ConsultParams;
use council_application::config::{DEFAULT_CALL_TIMEOUT, DEFAULT_ROUNDS};
use council_domain::{DomainError, ProviderKey};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw consultation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsultationConfig {
    /// Number of rounds
    pub rounds: u32,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// Default agent selection (empty = every provider)
    pub agents: Vec<String>,
}

impl Default for FileConsultationConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            timeout_secs: DEFAULT_CALL_TIMEOUT.as_secs(),
            agents: Vec::new(),
        }
    }
}

impl FileConsultationConfig {
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.rounds == 0 {
            issues.push(ConfigValidationError::InvalidRounds);
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        for agent in &self.agents {
            if agent.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyAgentKey);
            } else if ProviderKey::parse(agent.as_str()).is_err() {
                issues.push(ConfigValidationError::InvalidAgentKey(agent.clone()));
            }
        }
        issues
    }

    pub fn to_params(&self) -> ConsultParams {
        ConsultParams::default()
            .with_rounds(self.rounds)
            .with_call_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// The default selection, or `None` when every provider should take part
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
}
