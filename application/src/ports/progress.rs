//! Progress notification port
//!
//! Defines the interface for reporting progress during a consultation.

use council_domain::{Provider, RoundResult};

/// Callback for progress updates during a consultation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain text, nothing).
pub trait ConsultationProgress: Send + Sync {
    /// Called before a round is dispatched
    fn on_round_start(&self, round: u32, total_rounds: u32, participants: usize);

    /// Called as each provider's outcome arrives (completion order)
    fn on_provider_complete(&self, round: u32, provider: &Provider, success: bool);

    /// Called once all outcomes of a round are collected
    fn on_round_complete(&self, result: &RoundResult);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ConsultationProgress for NoProgress {
    fn on_round_start(&self, _round: u32, _total_rounds: u32, _participants: usize) {}
    fn on_provider_complete(&self, _round: u32, _provider: &Provider, _success: bool) {}
    fn on_round_complete(&self, _result: &RoundResult) {}
}
