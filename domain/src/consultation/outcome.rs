//! Invocation outcome - the result of asking one provider once.

use serde::{Deserialize, Serialize};

/// Outcome of a single (provider, round) invocation (Value Object)
///
/// Every failure mode of an invocation is represented here as data;
/// nothing below the invoker boundary is allowed to escape as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum InvocationOutcome {
    /// The provider answered
    Success { text: String },
    /// The provider could not answer (unavailable, timeout, transport error...)
    Failure { reason: String },
}

impl InvocationOutcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Answer text, if successful
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success { text } => Some(text),
            Self::Failure { .. } => None,
        }
    }

    /// Failure reason, if failed
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let ok = InvocationOutcome::success("answer");
        assert!(ok.is_success());
        assert_eq!(ok.text(), Some("answer"));
        assert_eq!(ok.reason(), None);

        let err = InvocationOutcome::failure("Timeout after 120s");
        assert!(!err.is_success());
        assert_eq!(err.text(), None);
        assert_eq!(err.reason(), Some("Timeout after 120s"));
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(InvocationOutcome::failure("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "failure", "reason": "boom"}));
    }
}
