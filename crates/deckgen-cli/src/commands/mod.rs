//! Command implementations for the deckgen CLI.

pub mod generate;
pub mod json_output;
