//! [`ProviderInvoker`] adapter that dispatches on [`Invocation`]

use super::environment::HostEnvironment;
use super::process::ProcessInvoker;
use super::remote::RemoteInvoker;
use async_trait::async_trait;
use council_application::ProviderInvoker;
use council_domain::{Invocation, InvocationOutcome, Provider};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Invokes process and remote providers
pub struct CouncilInvoker {
    process: ProcessInvoker,
    remote: RemoteInvoker,
}

impl CouncilInvoker {
    pub fn new(env: Arc<dyn HostEnvironment>) -> Self {
        Self {
            process: ProcessInvoker::new(),
            remote: RemoteInvoker::new(env),
        }
    }
}

#[async_trait]
impl ProviderInvoker for CouncilInvoker {
    async fn invoke(
        &self,
        provider: &Provider,
        prompt: &str,
        timeout: Duration,
    ) -> InvocationOutcome {
        if !provider.available {
            debug!("Skipping {}: not available", provider.key);
            return InvocationOutcome::failure(provider.unavailable_reason());
        }

        match &provider.invocation {
            Invocation::Process(command) => self.process.invoke(command, prompt, timeout).await,
            Invocation::Remote(endpoint) => self.remote.invoke(endpoint, prompt, timeout).await,
        }
    }
}
