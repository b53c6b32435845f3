//! Run Consultation use case
//!
//! Drives a whole multi-round consultation: select the participants once,
//! run the rounds strictly in order, and thread the transcript from each
//! round into the next.

use crate::config::ConsultParams;
use crate::ports::progress::{ConsultationProgress, NoProgress};
use crate::ports::provider_invoker::ProviderInvoker;
use crate::use_cases::run_round::RunRoundUseCase;
use council_domain::{
    ConsultationReport, DomainError, ProviderKey, ProviderRegistry, Question, Transcript,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort a consultation before any round runs
#[derive(Error, Debug)]
pub enum RunConsultationError {
    #[error("No AI agents available")]
    NoParticipants,

    #[error("Invalid consultation parameters: {0}")]
    InvalidParams(#[from] DomainError),
}

/// Input for the RunConsultation use case
#[derive(Debug, Clone)]
pub struct RunConsultationInput {
    /// The question to discuss
    pub question: Question,
    /// Every provider known for this run, availability already resolved
    pub registry: ProviderRegistry,
    /// Restrict the run to these keys (`None` or empty = whole registry)
    pub selected: Option<Vec<ProviderKey>>,
    /// Round count and per-call timeout
    pub params: ConsultParams,
}

impl RunConsultationInput {
    pub fn new(question: impl Into<Question>, registry: ProviderRegistry) -> Self {
        Self {
            question: question.into(),
            registry,
            selected: None,
            params: ConsultParams::default(),
        }
    }

    pub fn with_selection(mut self, keys: Vec<ProviderKey>) -> Self {
        self.selected = Some(keys);
        self
    }

    pub fn with_params(mut self, params: ConsultParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.params.rounds = rounds;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.params.call_timeout = timeout;
        self
    }
}

/// Use case for running a multi-round consultation
pub struct RunConsultationUseCase<I: ProviderInvoker + 'static> {
    round: RunRoundUseCase<I>,
}

impl<I: ProviderInvoker + 'static> RunConsultationUseCase<I> {
    pub fn new(invoker: Arc<I>) -> Self {
        Self {
            round: RunRoundUseCase::new(invoker),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunConsultationInput,
    ) -> Result<ConsultationReport, RunConsultationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Participants are fixed before round 1: a provider that fails in one
    /// round is still asked again in the next. Each participant is invoked
    /// exactly once per round; failed calls are never retried.
    pub async fn execute_with_progress(
        &self,
        input: RunConsultationInput,
        progress: &dyn ConsultationProgress,
    ) -> Result<ConsultationReport, RunConsultationError> {
        input.params.validate()?;

        let RunConsultationInput {
            question,
            registry,
            selected,
            params,
        } = input;

        if let Some(keys) = &selected {
            for key in registry.unknown_keys(keys) {
                warn!("Ignoring unknown provider '{}'", key);
            }
        }

        let selection = registry.select(selected.as_deref());
        if selection.participants.is_empty() {
            warn!(
                "No participants: {} selected providers are unavailable",
                selection.unavailable.len()
            );
            return Err(RunConsultationError::NoParticipants);
        }

        info!(
            "Starting consultation with {} participants over {} rounds",
            selection.participants.len(),
            params.rounds
        );

        let mut report = ConsultationReport::new(
            question,
            selection.participant_keys(),
            selection.unavailable_keys(),
        );
        let mut transcript = Transcript::new();

        for round in 1..=params.rounds {
            progress.on_round_start(round, params.rounds, selection.participants.len());

            let result = self
                .round
                .run_round(
                    round,
                    &report.question,
                    &transcript,
                    &selection.participants,
                    params.call_timeout,
                    progress,
                )
                .await;

            transcript = transcript.advance(&result);
            info!(
                "Round {} complete: {} answered, {} failed",
                round,
                result.successes().count(),
                result.failures().count()
            );

            progress.on_round_complete(&result);
            report.rounds.push(result);
        }

        report.transcript = transcript;
        info!(
            "Consultation complete: {} rounds, {} failed calls",
            report.rounds.len(),
            report.failure_count()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use council_domain::{Invocation, InvocationOutcome, ProcessCommand, Provider, RoundResult};
    use std::collections::HashMap;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Answers `"<lowercase key><call number>"` (e.g. `a1`, `a2`) and
    /// records every prompt it receives.
    #[derive(Default)]
    struct MockInvoker {
        failing_calls: Vec<(String, usize)>,
        calls: Mutex<HashMap<String, usize>>,
        prompts: Mutex<Vec<(String, String)>>,
    }

    impl MockInvoker {
        fn call_count(&self, key: &str) -> usize {
            self.calls.lock().unwrap().get(key).copied().unwrap_or(0)
        }

        fn prompts_for(&self, key: &str) -> Vec<String> {
            self.prompts
                .lock()
                .unwrap()
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, p)| p.clone())
                .collect()
        }
    }

    #[async_trait]
    impl ProviderInvoker for MockInvoker {
        async fn invoke(
            &self,
            provider: &Provider,
            prompt: &str,
            _timeout: Duration,
        ) -> InvocationOutcome {
            let key = provider.key.to_string();
            let call = {
                let mut calls = self.calls.lock().unwrap();
                let count = calls.entry(key.clone()).or_insert(0);
                *count += 1;
                *count
            };
            self.prompts
                .lock()
                .unwrap()
                .push((key.clone(), prompt.to_string()));

            if self.failing_calls.contains(&(key.clone(), call)) {
                return InvocationOutcome::failure("Timeout after 1s");
            }
            InvocationOutcome::success(format!("{}{}", key.to_lowercase(), call))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ConsultationProgress for RecordingProgress {
        fn on_round_start(&self, round: u32, total_rounds: u32, participants: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {}/{} ({})", round, total_rounds, participants));
        }

        fn on_provider_complete(&self, round: u32, provider: &Provider, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {} {} {}", round, provider.key, success));
        }

        fn on_round_complete(&self, result: &RoundResult) {
            self.events
                .lock()
                .unwrap()
                .push(format!("complete {}", result.round));
        }
    }

    fn provider(key: &str, available: bool) -> Provider {
        Provider::new(
            key,
            key,
            Invocation::Process(ProcessCommand::new(key.to_lowercase())),
            available,
        )
    }

    fn keys(list: &[ProviderKey]) -> Vec<&str> {
        list.iter().map(ProviderKey::as_str).collect()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_two_round_scenario() {
        let invoker = Arc::new(MockInvoker::default());
        let use_case = RunConsultationUseCase::new(Arc::clone(&invoker));
        let registry = ProviderRegistry::new(vec![provider("A", true), provider("B", false)]);

        let report = use_case
            .execute(RunConsultationInput::new("Q", registry).with_rounds(2))
            .await
            .unwrap();

        assert_eq!(report.question.content(), "Q");
        assert_eq!(keys(&report.participants), vec!["A"]);
        assert_eq!(keys(&report.unavailable), vec!["B"]);
        assert_eq!(report.rounds.len(), 2);

        let a = ProviderKey::new("A");
        assert_eq!(report.rounds[0].get(&a).and_then(|o| o.text()), Some("a1"));
        assert_eq!(report.rounds[1].get(&a).and_then(|o| o.text()), Some("a2"));

        let prompts = invoker.prompts_for("A");
        assert_eq!(prompts.len(), 2);
        assert!(!prompts[0].contains("Previous responses"));
        assert!(prompts[1].contains("--- A ---\na1\n"));
        assert!(!prompts[1].contains("--- B ---"));

        // B is never dispatched
        assert_eq!(invoker.call_count("B"), 0);

        assert_eq!(report.transcript.len(), 1);
        assert_eq!(report.transcript.get(&a).map(|e| e.text.as_str()), Some("a2"));
    }

    #[tokio::test]
    async fn test_each_round_keyed_by_participants() {
        let invoker = Arc::new(MockInvoker::default());
        let use_case = RunConsultationUseCase::new(invoker);
        let registry = ProviderRegistry::new(vec![
            provider("A", true),
            provider("B", true),
            provider("C", false),
        ]);

        let report = use_case
            .execute(RunConsultationInput::new("Q", registry).with_rounds(3))
            .await
            .unwrap();

        assert_eq!(report.rounds.len(), 3);
        for (i, round) in report.rounds.iter().enumerate() {
            assert_eq!(round.round, i as u32 + 1);
            let round_keys: Vec<_> = round.outcomes.keys().map(ProviderKey::as_str).collect();
            assert_eq!(round_keys, vec!["A", "B"]);
        }
    }

    #[tokio::test]
    async fn test_no_participants_runs_nothing() {
        let invoker = Arc::new(MockInvoker::default());
        let use_case = RunConsultationUseCase::new(Arc::clone(&invoker));
        let registry = ProviderRegistry::new(vec![provider("A", false), provider("B", false)]);

        let result = use_case
            .execute(RunConsultationInput::new("Q", registry))
            .await;

        assert!(matches!(result, Err(RunConsultationError::NoParticipants)));
        assert!(invoker.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_selection_restricts_participants() {
        let invoker = Arc::new(MockInvoker::default());
        let use_case = RunConsultationUseCase::new(Arc::clone(&invoker));
        let registry = ProviderRegistry::new(vec![
            provider("A", true),
            provider("B", true),
            provider("C", false),
        ]);

        let report = use_case
            .execute(
                RunConsultationInput::new("Q", registry)
                    .with_selection(vec![ProviderKey::new("B"), ProviderKey::new("C")])
                    .with_rounds(1),
            )
            .await
            .unwrap();

        assert_eq!(keys(&report.participants), vec!["B"]);
        assert_eq!(keys(&report.unavailable), vec!["C"]);
        assert_eq!(invoker.call_count("A"), 0);
        assert_eq!(invoker.call_count("B"), 1);
    }

    #[tokio::test]
    async fn test_selection_of_only_unavailable_fails() {
        let use_case = RunConsultationUseCase::new(Arc::new(MockInvoker::default()));
        let registry = ProviderRegistry::new(vec![provider("A", true), provider("C", false)]);

        let result = use_case
            .execute(
                RunConsultationInput::new("Q", registry)
                    .with_selection(vec![ProviderKey::new("C")]),
            )
            .await;

        assert!(matches!(result, Err(RunConsultationError::NoParticipants)));
    }

    #[tokio::test]
    async fn test_failed_provider_is_asked_again_without_retry() {
        let invoker = Arc::new(MockInvoker {
            failing_calls: vec![("B".to_string(), 1)],
            ..Default::default()
        });
        let use_case = RunConsultationUseCase::new(Arc::clone(&invoker));
        let registry = ProviderRegistry::new(vec![provider("A", true), provider("B", true)]);

        let report = use_case
            .execute(RunConsultationInput::new("Q", registry).with_rounds(2))
            .await
            .unwrap();

        let b = ProviderKey::new("B");
        assert_eq!(
            report.rounds[0].get(&b).and_then(|o| o.reason()),
            Some("Timeout after 1s")
        );
        assert_eq!(report.rounds[1].get(&b).and_then(|o| o.text()), Some("b2"));
        // one call per round, no retries
        assert_eq!(invoker.call_count("B"), 2);

        // round 2 prompt only carries A, since B had not succeeded yet
        let prompt = &invoker.prompts_for("B")[1];
        assert!(prompt.contains("--- A ---\na1\n"));
        assert!(!prompt.contains("--- B ---"));
        assert_eq!(report.failure_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_transcript_entry() {
        let invoker = Arc::new(MockInvoker {
            failing_calls: vec![("A".to_string(), 2)],
            ..Default::default()
        });
        let use_case = RunConsultationUseCase::new(Arc::clone(&invoker));
        let registry = ProviderRegistry::new(vec![provider("A", true)]);

        let report = use_case
            .execute(RunConsultationInput::new("Q", registry).with_rounds(3))
            .await
            .unwrap();

        // round 3 still sees A's round-1 answer
        let prompt = &invoker.prompts_for("A")[2];
        assert!(prompt.contains("--- A ---\na1\n"));
        let a = ProviderKey::new("A");
        assert_eq!(report.transcript.get(&a).map(|e| e.text.as_str()), Some("a3"));
    }

    #[tokio::test]
    async fn test_zero_rounds_rejected() {
        let use_case = RunConsultationUseCase::new(Arc::new(MockInvoker::default()));
        let registry = ProviderRegistry::new(vec![provider("A", true)]);

        let result = use_case
            .execute(RunConsultationInput::new("Q", registry).with_rounds(0))
            .await;

        assert!(matches!(
            result,
            Err(RunConsultationError::InvalidParams(DomainError::InvalidRounds))
        ));
    }

    #[tokio::test]
    async fn test_progress_events_in_round_order() {
        let use_case = RunConsultationUseCase::new(Arc::new(MockInvoker::default()));
        let registry = ProviderRegistry::new(vec![provider("A", true)]);
        let progress = RecordingProgress::default();

        use_case
            .execute_with_progress(
                RunConsultationInput::new("Q", registry).with_rounds(2),
                &progress,
            )
            .await
            .unwrap();

        assert_eq!(
            progress.events.into_inner().unwrap(),
            vec![
                "start 1/2 (1)",
                "done 1 A true",
                "complete 1",
                "start 2/2 (1)",
                "done 2 A true",
                "complete 2",
            ]
        );
    }
}
