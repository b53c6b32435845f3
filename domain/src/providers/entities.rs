//! Provider entities - who can answer and how they are reached.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Stable identifier of a provider (e.g. `claude`, `perplexity`)
///
/// Keys are what callers select on and what round results are keyed by.
/// Display names are only used for labels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderKey(String);

impl ProviderKey {
    /// Create a key, panicking on blank input.
    ///
    /// # Panics
    /// Panics if the key is empty or contains whitespace
    pub fn new(key: impl Into<String>) -> Self {
        match Self::parse(key) {
            Ok(key) => key,
            Err(e) => panic!("{}", e),
        }
    }

    /// Parse a key, rejecting empty strings and embedded whitespace.
    pub fn parse(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidProviderKey(key));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProviderKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for ProviderKey {
    fn from(s: &str) -> Self {
        ProviderKey::new(s)
    }
}

/// A local executable invoked as `<program> <args...> <prompt>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessCommand {
    /// Executable name or path, resolved through `PATH`
    pub program: String,
    /// Fixed argument prefix placed before the prompt
    pub args: Vec<String>,
}

impl ProcessCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// A remote HTTP endpoint taking `{"preset": ..., "input": <prompt>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEndpoint {
    /// Full URL the request is POSTed to
    pub url: String,
    /// Fixed `preset` value sent with every request
    pub preset: String,
    /// Environment variable holding the bearer token
    pub api_key_env: String,
}

impl RemoteEndpoint {
    pub fn new(
        url: impl Into<String>,
        preset: impl Into<String>,
        api_key_env: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            preset: preset.into(),
            api_key_env: api_key_env.into(),
        }
    }
}

/// How a provider is invoked.
///
/// A closed set: the invoker adapter matches on it instead of
/// going through a plugin trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Invocation {
    /// Spawn a local command-line tool
    Process(ProcessCommand),
    /// Issue an authenticated HTTP request
    Remote(RemoteEndpoint),
}

/// A named answer source (Entity)
///
/// `available` is resolved once, when the registry is built, and stays
/// fixed for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub key: ProviderKey,
    pub name: String,
    pub invocation: Invocation,
    pub available: bool,
}

impl Provider {
    pub fn new(
        key: impl Into<ProviderKey>,
        name: impl Into<String>,
        invocation: Invocation,
        available: bool,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            invocation,
            available,
        }
    }

    /// Short readiness label shown in the status listing.
    pub fn status_label(&self) -> &'static str {
        match (&self.invocation, self.available) {
            (Invocation::Process(_), true) => "CLI available",
            (Invocation::Process(_), false) => "CLI not found",
            (Invocation::Remote(_), true) => "API configured",
            (Invocation::Remote(_), false) => "API key not set",
        }
    }

    /// Failure reason used when an unavailable provider is asked to answer.
    pub fn unavailable_reason(&self) -> String {
        format!("{} not available", self.name)
    }
}
