//! Providers - the answer sources taking part in a consultation.
//!
//! - [`entities::Provider`]: a named source plus how to invoke it
//! - [`entities::Invocation`]: closed set of invocation strategies
//!   (local process or remote HTTP endpoint)
//! - [`registry::ProviderRegistry`]: the ordered provider set of one run

pub mod entities;
pub mod registry;
