//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout one-to-one and are
//! deserialized directly; domain types are used where they exist.

mod consultation;
mod output;
mod providers;

pub use consultation::FileConsultationConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use providers::{FileProviderConfig, FileProvidersConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("consultation.rounds must be at least 1")]
    InvalidRounds,

    #[error("consultation.timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("consultation.agents contains an empty key")]
    EmptyAgentKey,

    #[error("consultation.agents: '{0}' is not a valid agent key")]
    InvalidAgentKey(String),

    #[error("providers.{key}: {reason}")]
    InvalidProvider { key: String, reason: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Round count, per-call timeout and default agent selection
    pub consultation: FileConsultationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Per-provider overrides and additions, keyed by provider key
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the whole file, returning every problem found.
    ///
    /// Checks that need the built-in catalog (a new provider lacking a
    /// command, say) happen when the catalog applies the overrides.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = self.consultation.validate();

        for (key, provider) in &self.providers {
            issues.extend(provider.validate(key));
        }

        issues
    }
}
