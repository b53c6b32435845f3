//! Provider configuration from TOML (`[providers.<key>]` tables)
//!
//! A table whose key matches a built-in provider patches it; any other key
//! defines a new provider.
//!
//! ```toml
//! [providers.claude]
//! command = ["claude", "-p", "--model", "opus"]
//!
//! [providers.gemini]
//! enabled = false
//!
//! [providers.mirror]
//! name = "Mirror"
//! endpoint = "http://localhost:8080/v1/responses"
//! preset = "sonar"
//! api_key_env = "MIRROR_API_KEY"
//! ```

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All `[providers.*]` tables, keyed by provider key
pub type FileProvidersConfig = BTreeMap<String, FileProviderConfig>;

/// One `[providers.<key>]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Display name
    pub name: Option<String>,
    /// Program followed by its fixed arguments; the prompt is appended
    pub command: Option<Vec<String>>,
    /// URL for a remote provider
    pub endpoint: Option<String>,
    /// `preset` value sent to a remote provider
    pub preset: Option<String>,
    /// Environment variable holding the remote provider's bearer token
    pub api_key_env: Option<String>,
    /// `false` removes the provider
    pub enabled: bool,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            name: None,
            command: None,
            endpoint: None,
            preset: None,
            api_key_env: None,
            enabled: true,
        }
    }
}

impl FileProviderConfig {
    pub fn validate(&self, key: &str) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        let mut issue = |reason: &str| {
            issues.push(ConfigValidationError::InvalidProvider {
                key: key.to_string(),
                reason: reason.to_string(),
            })
        };

        if key.trim().is_empty() {
            issue("provider key cannot be empty");
        }
        if self.command.is_some() && self.endpoint.is_some() {
            issue("command and endpoint are mutually exclusive");
        }
        if self
            .command
            .as_ref()
            .is_some_and(|c| c.first().is_none_or(|p| p.trim().is_empty()))
        {
            issue("command cannot be empty");
        }
        if self.endpoint.as_ref().is_some_and(|e| e.trim().is_empty()) {
            issue("endpoint cannot be empty");
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_default() {
        let config: FileProviderConfig = toml::from_str(r#"name = "X""#).unwrap();
        assert!(config.enabled);
        assert!(config.validate("x").is_empty());
    }

    #[test]
    fn test_empty_command_invalid() {
        let config = FileProviderConfig {
            command: Some(vec![String::new()]),
            ..Default::default()
        };
        assert_eq!(config.validate("x").len(), 1);
    }

    #[test]
    fn test_command_and_endpoint_conflict() {
        let config = FileProviderConfig {
            command: Some(vec!["x".to_string()]),
            endpoint: Some("http://localhost/".to_string()),
            ..Default::default()
        };
        let issues = config.validate("x");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].to_string().contains("mutually exclusive"));
    }
}
