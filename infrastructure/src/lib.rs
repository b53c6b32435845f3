//! Infrastructure layer for ai-council
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer (process and HTTP provider invocation), host readiness
//! probing, and configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileConsultationConfig,
    FileOutputConfig, FileOutputFormat, FileProviderConfig, FileProvidersConfig,
};
pub use providers::{
    CouncilInvoker, HostEnvironment, ProcessInvoker, ProviderCatalog, ProviderDefinition,
    RemoteInvoker, StaticEnvironment, SystemEnvironment,
};
