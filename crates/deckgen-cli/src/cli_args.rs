//! CLI argument definitions for the deckgen adapter.
//!
//! The surface is flat: one invocation, one generation request. Enum
//! options are constrained with `value_parser` lists so invalid values are
//! rejected before any subprocess is launched.

use clap::Parser;

/// Deckgen - Sentinel presentation engine adapter
#[derive(Parser, Debug)]
#[command(name = "deckgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Initiative to generate the deck for
    #[arg(long)]
    pub initiative_id: String,

    /// Target buyer (omitted from the engine invocation when empty)
    #[arg(long, default_value = "")]
    pub buyer_id: String,

    /// Deck audience
    #[arg(long, default_value = "utc-internal", value_parser = ["utc-internal", "buyer-mandate-mirror"])]
    pub deck_type: String,

    /// Visual template
    #[arg(long, default_value = "sovereign-memo", value_parser = ["sovereign-memo", "clean-minimal", "blueprint"])]
    pub template_id: String,

    /// Provider for slide imagery
    #[arg(long, default_value = "placeholder", value_parser = ["placeholder", "openai", "gemini", "grok"])]
    pub image_provider: String,

    /// Provider for copy rewriting
    #[arg(long, default_value = "local", value_parser = ["local", "claude"])]
    pub copy_provider: String,

    /// Free-text operator intent forwarded to the engine
    #[arg(long, default_value = "")]
    pub prompt: String,

    /// Let the engine draft content from initiative and buyer context
    #[arg(long)]
    pub auto_generate: bool,

    /// Workspace root the engine runs in and writes decks under
    #[arg(long, default_value = ".")]
    pub workspace_root: String,

    /// Engine script path, resolved against the workspace root
    #[arg(long, default_value = "scripts/generate_deck.js")]
    pub engine_script: String,

    /// Node.js executable (default: discovered via DECKGEN_NODE, then PATH)
    #[arg(long)]
    pub node_path: Option<String>,

    /// Engine timeout in seconds
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,
}
