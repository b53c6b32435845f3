//! Provider registry - the fixed set of providers known for one run.

use super::entities::{Provider, ProviderKey};
use serde::{Deserialize, Serialize};

/// One row of the provider status listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub key: ProviderKey,
    pub name: String,
    pub available: bool,
    /// Readiness label, e.g. "CLI not found" or "API configured"
    pub reason: String,
}

/// Providers split by availability after applying a selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected and available; these are queried every round
    pub participants: Vec<Provider>,
    /// Selected but unavailable; reported, never queried
    pub unavailable: Vec<Provider>,
}

impl Selection {
    pub fn participant_keys(&self) -> Vec<ProviderKey> {
        self.participants.iter().map(|p| p.key.clone()).collect()
    }

    pub fn unavailable_keys(&self) -> Vec<ProviderKey> {
        self.unavailable.iter().map(|p| p.key.clone()).collect()
    }
}

/// Ordered, read-only collection of providers (keys are unique)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderRegistry {
    providers: Vec<Provider>,
}

impl ProviderRegistry {
    /// Build a registry, keeping first-seen order.
    ///
    /// A later provider with an already-registered key replaces the
    /// earlier entry in place.
    pub fn new(providers: impl IntoIterator<Item = Provider>) -> Self {
        let mut registry = Self::default();
        for provider in providers {
            registry.insert(provider);
        }
        registry
    }

    fn insert(&mut self, provider: Provider) {
        match self.providers.iter_mut().find(|p| p.key == provider.key) {
            Some(slot) => *slot = provider,
            None => self.providers.push(provider),
        }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn get(&self, key: &ProviderKey) -> Option<&Provider> {
        self.providers.iter().find(|p| &p.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ProviderKey> {
        self.providers.iter().map(|p| &p.key)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Keys in `requested` that name no registered provider
    pub fn unknown_keys<'a>(&self, requested: &'a [ProviderKey]) -> Vec<&'a ProviderKey> {
        requested
            .iter()
            .filter(|key| self.get(key).is_none())
            .collect()
    }

    /// Split the registry into participants and unavailable providers.
    ///
    /// `None` or an empty selection means the whole registry. Otherwise
    /// only providers whose key is listed are considered; unknown keys
    /// match nothing. Registry order is preserved in both halves.
    pub fn select(&self, selected: Option<&[ProviderKey]>) -> Selection {
        let wanted = |provider: &Provider| match selected {
            Some(keys) if !keys.is_empty() => keys.contains(&provider.key),
            _ => true,
        };

        let (participants, unavailable) = self
            .providers
            .iter()
            .filter(|p| wanted(*p))
            .cloned()
            .partition(|p| p.available);

        Selection {
            participants,
            unavailable,
        }
    }

    /// Status listing for every registered provider
    pub fn statuses(&self) -> Vec<ProviderStatus> {
        self.providers
            .iter()
            .map(|p| ProviderStatus {
                key: p.key.clone(),
                name: p.name.clone(),
                available: p.available,
                reason: p.status_label().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::entities::{Invocation, ProcessCommand};

    fn provider(key: &str, available: bool) -> Provider {
        Provider::new(
            key,
            key.to_uppercase(),
            Invocation::Process(ProcessCommand::new(key)),
            available,
        )
    }

    fn registry() -> ProviderRegistry {
        ProviderRegistry::new(vec![
            provider("claude", true),
            provider("gemini", false),
            provider("codex", true),
            provider("perplexity", false),
        ])
    }

    fn keys(list: &[ProviderKey]) -> Vec<&str> {
        list.iter().map(ProviderKey::as_str).collect()
    }

    #[test]
    fn test_select_all_when_no_selection() {
        let selection = registry().select(None);
        assert_eq!(keys(&selection.participant_keys()), vec!["claude", "codex"]);
        assert_eq!(
            keys(&selection.unavailable_keys()),
            vec!["gemini", "perplexity"]
        );
    }

    #[test]
    fn test_empty_selection_means_all() {
        let selection = registry().select(Some(&[][..]));
        assert_eq!(selection.participants.len(), 2);
        assert_eq!(selection.unavailable.len(), 2);
    }

    #[test]
    fn test_select_subset_intersects_availability() {
        let wanted = vec![ProviderKey::new("codex"), ProviderKey::new("gemini")];
        let selection = registry().select(Some(wanted.as_slice()));
        assert_eq!(keys(&selection.participant_keys()), vec!["codex"]);
        assert_eq!(keys(&selection.unavailable_keys()), vec!["gemini"]);
    }

    #[test]
    fn test_select_only_unavailable_yields_no_participants() {
        let wanted = vec![ProviderKey::new("perplexity")];
        let selection = registry().select(Some(wanted.as_slice()));
        assert!(selection.participants.is_empty());
        assert_eq!(keys(&selection.unavailable_keys()), vec!["perplexity"]);
    }

    #[test]
    fn test_unknown_keys() {
        let requested = vec![ProviderKey::new("claude"), ProviderKey::new("grok")];
        let registry = registry();
        let unknown = registry.unknown_keys(&requested);
        assert_eq!(unknown, vec![&ProviderKey::new("grok")]);
    }

    #[test]
    fn test_duplicate_key_replaces_in_place() {
        let registry = ProviderRegistry::new(vec![
            provider("claude", false),
            provider("codex", true),
            provider("claude", true),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.providers()[0].key.as_str(), "claude");
        assert!(registry.providers()[0].available);
    }

    #[test]
    fn test_statuses() {
        let statuses = registry().statuses();
        assert_eq!(statuses.len(), 4);
        assert_eq!(statuses[0].reason, "CLI available");
        assert_eq!(statuses[1].reason, "CLI not found");
        assert!(!statuses[1].available);
    }
}
