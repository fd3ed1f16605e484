//! Deck output validation.
//!
//! After the engine reports a deck path, the adapter checks that the
//! directory actually holds everything a viewer needs. Missing entries are
//! accumulated and reported together so one diagnostic pass shows the full
//! extent of an incomplete generation.

use std::path::Path;

use crate::error::{EngineError, EngineResult};

/// Entries every generated deck directory must contain.
pub const REQUIRED_DECK_ENTRIES: [&str; 4] = ["deck.json", "index.html", "slides", "assets"];

/// Checks that the deck directory the engine reported is complete.
///
/// `deck_rel` is resolved against `workspace_root`, matching the frame the
/// engine writes in. Existence checks only; nothing is read or written.
pub fn check_deck_outputs(workspace_root: &Path, deck_rel: &str) -> EngineResult<()> {
    let deck_dir = workspace_root.join(deck_rel);

    let missing: Vec<String> = REQUIRED_DECK_ENTRIES
        .iter()
        .filter(|entry| !deck_dir.join(entry).exists())
        .map(|entry| deck_dir.join(entry).display().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EngineError::MissingOutputs { missing })
    }
}
