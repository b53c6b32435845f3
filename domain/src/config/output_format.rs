//! Output format value object

use serde::{Deserialize, Serialize};

/// How a consultation report is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable rounds, printed as each round completes (default)
    #[default]
    Text,
    /// A single pretty-printed JSON document
    Json,
}
