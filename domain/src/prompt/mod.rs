//! Prompt domain
//!
//! Templates for the prompt sent to every participant in each round.

mod template;

pub use template::PromptTemplate;
