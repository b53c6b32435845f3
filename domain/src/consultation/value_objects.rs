//! Consultation value objects - immutable results of rounds and runs.
//!
//! - [`RoundResult`] - every participant's outcome for one round
//! - [`ConsultationReport`] - the complete run: question, rounds, who took part

use super::outcome::InvocationOutcome;
use super::transcript::Transcript;
use crate::core::question::Question;
use crate::providers::entities::ProviderKey;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// A provider's outcome within a round, with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantOutcome {
    pub name: String,
    pub outcome: InvocationOutcome,
}

/// Outcomes of a single round, keyed by provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// 1-based round number
    pub round: u32,
    pub outcomes: BTreeMap<ProviderKey, ParticipantOutcome>,
}

impl RoundResult {
    pub fn new(round: u32) -> Self {
        Self {
            round,
            outcomes: BTreeMap::new(),
        }
    }

    /// Record an outcome, replacing any earlier one for the same key.
    pub fn record(
        &mut self,
        key: ProviderKey,
        name: impl Into<String>,
        outcome: InvocationOutcome,
    ) {
        self.outcomes.insert(
            key,
            ParticipantOutcome {
                name: name.into(),
                outcome,
            },
        );
    }

    pub fn with_outcome(
        mut self,
        key: impl Into<ProviderKey>,
        name: impl Into<String>,
        outcome: InvocationOutcome,
    ) -> Self {
        self.record(key.into(), name, outcome);
        self
    }

    pub fn get(&self, key: &ProviderKey) -> Option<&InvocationOutcome> {
        self.outcomes.get(key).map(|p| &p.outcome)
    }

    pub fn contains(&self, key: &ProviderKey) -> bool {
        self.outcomes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Successful answers as `(key, name, text)`
    pub fn successes(&self) -> impl Iterator<Item = (&ProviderKey, &str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|(key, p)| p.outcome.text().map(|text| (key, p.name.as_str(), text)))
    }

    /// Failures as `(key, name, reason)`
    pub fn failures(&self) -> impl Iterator<Item = (&ProviderKey, &str, &str)> {
        self.outcomes.iter().filter_map(|(key, p)| {
            p.outcome
                .reason()
                .map(|reason| (key, p.name.as_str(), reason))
        })
    }

    /// Provider key → answer text
    pub fn responses(&self) -> BTreeMap<&ProviderKey, &str> {
        self.successes().map(|(key, _, text)| (key, text)).collect()
    }

    /// Provider key → failure reason
    pub fn errors(&self) -> BTreeMap<&ProviderKey, &str> {
        self.failures()
            .map(|(key, _, reason)| (key, reason))
            .collect()
    }
}

impl Serialize for RoundResult {
    /// `{"round": n, "responses": {key: text}, "errors": {key: reason}}`
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("RoundResult", 3)?;
        state.serialize_field("round", &self.round)?;
        state.serialize_field("responses", &self.responses())?;
        state.serialize_field("errors", &self.errors())?;
        state.end()
    }
}

/// Complete result of a consultation run
#[derive(Debug, Clone, Serialize)]
pub struct ConsultationReport {
    /// The original question
    pub question: Question,
    /// One entry per completed round, in round order
    pub rounds: Vec<RoundResult>,
    /// Selected and available at start; queried every round
    pub participants: Vec<ProviderKey>,
    /// Selected but unavailable at start
    pub unavailable: Vec<ProviderKey>,
    /// Latest successful answer per provider after the final round
    #[serde(skip)]
    pub transcript: Transcript,
}

impl ConsultationReport {
    pub fn new(
        question: Question,
        participants: Vec<ProviderKey>,
        unavailable: Vec<ProviderKey>,
    ) -> Self {
        Self {
            question,
            rounds: Vec::new(),
            participants,
            unavailable,
            transcript: Transcript::default(),
        }
    }

    /// Total number of failed invocations across all rounds
    pub fn failure_count(&self) -> usize {
        self.rounds.iter().map(|r| r.failures().count()).sum()
    }
}
