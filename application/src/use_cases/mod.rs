//! Use cases (application services)
//!
//! - [`run_round`]: one concurrent broadcast-and-collect round
//! - [`run_consultation`]: the full multi-round consultation

pub mod run_consultation;
pub mod run_round;
