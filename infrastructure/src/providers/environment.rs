//! Host environment probing
//!
//! Provider readiness depends on two facts about the host: whether a
//! command resolves on `PATH`, and whether a credential variable is set.
//! Both are behind [`HostEnvironment`] so the catalog and the remote
//! invoker can be exercised without touching the real process environment.

use std::collections::{HashMap, HashSet};

/// Read-only view of the host used for readiness checks
pub trait HostEnvironment: Send + Sync {
    /// Whether `program` resolves to an executable on `PATH`
    fn has_command(&self, program: &str) -> bool;

    /// Value of the environment variable `name`, if present
    fn var(&self, name: &str) -> Option<String>;

    /// Whether `name` is set to something other than whitespace
    fn has_secret(&self, name: &str) -> bool {
        self.var(name).is_some_and(|v| !v.trim().is_empty())
    }
}

/// The real process environment (`PATH` lookup via `which`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl HostEnvironment for SystemEnvironment {
    fn has_command(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed set of commands and variables.
///
/// Used by tests and by callers that want to pin readiness explicitly.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    commands: HashSet<String>,
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(mut self, program: impl Into<String>) -> Self {
        self.commands.insert(program.into());
        self
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl HostEnvironment for StaticEnvironment {
    fn has_command(&self, program: &str) -> bool {
        self.commands.contains(program)
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
