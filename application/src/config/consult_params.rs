//! Consultation parameters: round count and per-call timeout.
//!
//! [`ConsultParams`] groups the static parameters that control
//! [`RunConsultationUseCase`](crate::use_cases::run_consultation::RunConsultationUseCase).

use council_domain::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of discussion rounds
pub const DEFAULT_ROUNDS: u32 = 2;

/// Default timeout for a single provider call
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(120);

/// Loop control for one consultation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultParams {
    /// Number of sequential rounds (at least 1)
    pub rounds: u32,
    /// Upper bound for every individual provider call
    pub call_timeout: Duration,
}

impl Default for ConsultParams {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }
}

impl ConsultParams {
    // ==================== Builder Methods ====================

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Reject zero rounds and a zero timeout.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.rounds == 0 {
            return Err(DomainError::InvalidRounds);
        }
        if self.call_timeout.is_zero() {
            return Err(DomainError::InvalidTimeout);
        }
        Ok(())
    }
}
