//! Deckgen Sentinel Engine Adapter
//!
//! This crate wraps the Sentinel presentation engine, a Node.js script that
//! generates slide decks from initiative and buyer context. The engine is an
//! external collaborator: it is spawned as a subprocess, receives its
//! parameters as command-line flags, and prints a single JSON document to
//! stdout describing where it wrote the deck.
//!
//! # Architecture
//!
//! - [`request`] - the validated parameter set handed to the engine, with
//!   closed enums for every constrained option
//! - [`engine`] - the [`DeckEngine`] collaborator trait and the
//!   [`NodeEngine`] subprocess runner that implements it
//! - [`validate`] - artifact checks over the deck directory the engine
//!   reports
//! - [`error`] - the error taxonomy shared by all of the above
//!
//! Communication happens over process boundaries only:
//!
//! 1. Request options are serialized as `--snake_case` engine flags
//! 2. The engine prints `{"deck": "<relative path>", "images": ...}`
//! 3. The adapter verifies `deck.json`, `index.html`, `slides/` and
//!    `assets/` exist under the reported path
//!
//! # Engine Requirements
//!
//! The runner needs a Node.js executable. It searches, in order:
//!
//! 1. The configured `node_path` override
//! 2. The `DECKGEN_NODE` environment variable
//! 3. The system PATH
//! 4. Common installation paths

pub mod engine;
pub mod error;
pub mod request;
pub mod validate;

pub use engine::{DeckEngine, EngineConfig, EngineResponse, NodeEngine, DEFAULT_TIMEOUT_SECS};
pub use error::{EngineError, EngineResult};
pub use request::{CopyProvider, DeckRequest, DeckType, ImageProvider, TemplateId};
pub use validate::{check_deck_outputs, REQUIRED_DECK_ENTRIES};
