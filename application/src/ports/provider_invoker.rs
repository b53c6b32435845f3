//! Provider invoker port
//!
//! Defines how the application layer asks a single provider for an answer.

use async_trait::async_trait;
use council_domain::{InvocationOutcome, Provider};
use std::time::Duration;

/// Invokes one provider with one prompt
///
/// Implementations (adapters) live in the infrastructure layer. The
/// contract is total: every failure (unavailable provider, timeout,
/// spawn or transport error, malformed reply) comes back as
/// [`InvocationOutcome::Failure`], so callers never need error handling
/// around `invoke`.
#[async_trait]
pub trait ProviderInvoker: Send + Sync {
    /// Ask `provider` to answer `prompt`, giving up after `timeout`.
    async fn invoke(&self, provider: &Provider, prompt: &str, timeout: Duration)
    -> InvocationOutcome;
}
