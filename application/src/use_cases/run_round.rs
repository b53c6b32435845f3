//! Run Round use case
//!
//! One broadcast-and-collect cycle: build the round's prompt, ask every
//! provider concurrently, and gather exactly one outcome per provider.

use crate::ports::progress::ConsultationProgress;
use crate::ports::provider_invoker::ProviderInvoker;
use council_domain::{
    InvocationOutcome, PromptTemplate, Provider, Question, RoundResult, Transcript,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Coordinates a single round of a consultation
pub struct RunRoundUseCase<I: ProviderInvoker + 'static> {
    invoker: Arc<I>,
}

impl<I: ProviderInvoker + 'static> RunRoundUseCase<I> {
    pub fn new(invoker: Arc<I>) -> Self {
        Self { invoker }
    }

    /// Run round `round` against `providers`.
    ///
    /// Every provider gets the same prompt and its own task; a slow or
    /// failing provider never holds up or cancels the others. Returns once
    /// every task has finished. The transcript is only read here; the
    /// caller derives the next one from the returned result.
    pub async fn run_round(
        &self,
        round: u32,
        question: &Question,
        transcript: &Transcript,
        providers: &[Provider],
        timeout: Duration,
        progress: &dyn ConsultationProgress,
    ) -> RoundResult {
        let prompt: Arc<str> =
            PromptTemplate::for_round(round, question.content(), transcript).into();

        info!(
            "Round {}: dispatching to {} providers ({} prior answers in prompt)",
            round,
            providers.len(),
            transcript.len()
        );
        debug!("Round {} prompt: {} bytes", round, prompt.len());

        let mut join_set = JoinSet::new();

        for provider in providers {
            let invoker = Arc::clone(&self.invoker);
            let provider = provider.clone();
            let prompt = Arc::clone(&prompt);

            join_set.spawn(async move {
                let outcome = invoker.invoke(&provider, &prompt, timeout).await;
                (provider, outcome)
            });
        }

        let mut result = RoundResult::new(round);

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((provider, outcome)) => {
                    match &outcome {
                        InvocationOutcome::Success { text } => {
                            info!("{} answered ({} bytes)", provider.name, text.len());
                        }
                        InvocationOutcome::Failure { reason } => {
                            warn!("{} failed: {}", provider.name, reason);
                        }
                    }
                    progress.on_provider_complete(round, &provider, outcome.is_success());
                    result.record(provider.key, provider.name, outcome);
                }
                Err(e) => {
                    warn!("Invocation task join error: {}", e);
                }
            }
        }

        // A task that panicked left no outcome behind; still one entry per provider.
        for provider in providers {
            if !result.contains(&provider.key) {
                result.record(
                    provider.key.clone(),
                    provider.name.clone(),
                    InvocationOutcome::failure(format!(
                        "{} invocation aborted",
                        provider.name
                    )),
                );
            }
        }

        result
    }
}
