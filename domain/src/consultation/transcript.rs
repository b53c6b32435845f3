//! Transcript - the latest successful answer of every provider so far.

use super::value_objects::RoundResult;
use crate::providers::entities::ProviderKey;
use std::collections::BTreeMap;

/// One provider's latest accepted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Display name used as the block label in prompts
    pub name: String,
    pub text: String,
}

/// Accumulated answers carried from round to round
///
/// A provider only appears after it has succeeded at least once. Entries
/// are overwritten by newer successes and never removed. Each round
/// produces a new transcript via [`Transcript::advance`] instead of
/// mutating a shared one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: BTreeMap<ProviderKey, TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript for the next round.
    ///
    /// Successes in `round` overwrite their provider's entry; failures
    /// leave whatever was there before.
    pub fn advance(&self, round: &RoundResult) -> Transcript {
        let mut next = self.clone();
        for (key, name, text) in round.successes() {
            next.entries.insert(
                key.clone(),
                TranscriptEntry {
                    name: name.to_string(),
                    text: text.to_string(),
                },
            );
        }
        next
    }

    pub fn get(&self, key: &ProviderKey) -> Option<&TranscriptEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &ProviderKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in provider key order
    pub fn iter(&self) -> impl Iterator<Item = (&ProviderKey, &TranscriptEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
