//! Domain layer for ai-council
//!
//! This crate contains the core value objects of a consultation.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Provider**: a named answer source, either a local command-line tool
//!   or a remote HTTP endpoint, with an availability flag fixed at start
//! - **Round**: one broadcast-and-collect cycle across all participants
//! - **Outcome**: per provider and round, either a text answer or a reason
//! - **Transcript**: latest successful answer per provider, fed into the
//!   next round's prompt

pub mod config;
pub mod consultation;
pub mod core;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use config::OutputFormat;
pub use consultation::{
    ConsultationReport, InvocationOutcome, ParticipantOutcome, RoundResult, Transcript,
    TranscriptEntry,
};
pub use core::{error::DomainError, question::Question};
pub use prompt::PromptTemplate;
pub use providers::{
    entities::{Invocation, ProcessCommand, Provider, ProviderKey, RemoteEndpoint},
    registry::{ProviderRegistry, ProviderStatus, Selection},
};
