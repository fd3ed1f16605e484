//! Deckgen CLI library.
//!
//! The binary is a thin adapter around the Sentinel presentation engine:
//! parse arguments, invoke the engine subprocess, validate the reported
//! deck directory, print one JSON report. The pipeline core lives in
//! [`commands::generate`] behind the `DeckEngine` trait so tests can drive
//! it with a fake collaborator.

pub mod cli_args;
pub mod commands;
