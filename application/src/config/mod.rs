//! Application-level configuration.
//!
//! - [`ConsultParams`]: round count and per-call timeout of a consultation

pub mod consult_params;

pub use consult_params::{ConsultParams, DEFAULT_CALL_TIMEOUT, DEFAULT_ROUNDS};
