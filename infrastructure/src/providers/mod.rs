//! Provider adapters
//!
//! - [`environment`]: readiness probing against the host
//! - [`catalog`]: built-in providers, config overrides, registry build
//! - [`process`] / [`remote`]: the two invocation mechanisms
//! - [`invoker`]: the [`ProviderInvoker`](council_application::ProviderInvoker)
//!   adapter dispatching between them

pub mod catalog;
pub mod environment;
pub mod invoker;
pub mod process;
pub mod remote;

use std::time::Duration;

pub use catalog::{ProviderCatalog, ProviderDefinition};
pub use environment::{HostEnvironment, StaticEnvironment, SystemEnvironment};
pub use invoker::CouncilInvoker;
pub use process::ProcessInvoker;
pub use remote::RemoteInvoker;

/// `"Timeout after 120s"`, `"Timeout after 0.2s"`
pub(crate) fn timeout_reason(timeout: Duration) -> String {
    format!("Timeout after {}s", timeout.as_secs_f64())
}
