//! Application layer for ai-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ConsultParams;
pub use ports::{
    progress::{ConsultationProgress, NoProgress},
    provider_invoker::ProviderInvoker,
};
pub use use_cases::run_consultation::{
    RunConsultationError, RunConsultationInput, RunConsultationUseCase,
};
pub use use_cases::run_round::RunRoundUseCase;
