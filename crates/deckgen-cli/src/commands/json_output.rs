//! JSON output types for the adapter's success report.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The report printed on a successful generation.
///
/// `deck` keeps the engine's relative path untouched so the caller's frame
/// of reference is preserved. `images` passes through whatever the engine
/// reported, or the literal string `"unknown"` when it reported nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOutput {
    pub ok: bool,
    pub deck: String,
    pub images: Value,
}

impl GenerateOutput {
    /// Builds the success report from the engine's response parts.
    pub fn success(deck: impl Into<String>, images: Option<Value>) -> Self {
        Self {
            ok: true,
            deck: deck.into(),
            images: images.unwrap_or_else(|| Value::String("unknown".to_string())),
        }
    }
}
