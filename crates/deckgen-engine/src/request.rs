//! Request model for the Sentinel engine.
//!
//! Every constrained option is a closed enum, parsed once at the CLI
//! boundary so invalid values are unrepresentable downstream. The request
//! is built once per invocation and never mutated.

use std::fmt;
use std::str::FromStr;

/// Audience the deck is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeckType {
    /// Internal UTC deck.
    #[default]
    UtcInternal,
    /// Deck mirroring a specific buyer's mandate.
    BuyerMandateMirror,
}

impl DeckType {
    /// Returns the wire identifier for this deck type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeckType::UtcInternal => "utc-internal",
            DeckType::BuyerMandateMirror => "buyer-mandate-mirror",
        }
    }
}

impl FromStr for DeckType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "utc-internal" => Ok(DeckType::UtcInternal),
            "buyer-mandate-mirror" => Ok(DeckType::BuyerMandateMirror),
            _ => Err(format!(
                "Unknown deck type: {}. Supported: utc-internal, buyer-mandate-mirror",
                s
            )),
        }
    }
}

impl fmt::Display for DeckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual template the engine renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateId {
    /// Dense memo layout.
    #[default]
    SovereignMemo,
    /// Sparse layout with generous whitespace.
    CleanMinimal,
    /// Diagram-heavy layout.
    Blueprint,
}

impl TemplateId {
    /// Returns the wire identifier for this template.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::SovereignMemo => "sovereign-memo",
            TemplateId::CleanMinimal => "clean-minimal",
            TemplateId::Blueprint => "blueprint",
        }
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sovereign-memo" => Ok(TemplateId::SovereignMemo),
            "clean-minimal" => Ok(TemplateId::CleanMinimal),
            "blueprint" => Ok(TemplateId::Blueprint),
            _ => Err(format!(
                "Unknown template: {}. Supported: sovereign-memo, clean-minimal, blueprint",
                s
            )),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider the engine uses for slide imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageProvider {
    /// Transparent placeholder PNGs, no network.
    #[default]
    Placeholder,
    Openai,
    Gemini,
    Grok,
}

impl ImageProvider {
    /// Returns the wire identifier for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageProvider::Placeholder => "placeholder",
            ImageProvider::Openai => "openai",
            ImageProvider::Gemini => "gemini",
            ImageProvider::Grok => "grok",
        }
    }
}

impl FromStr for ImageProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placeholder" => Ok(ImageProvider::Placeholder),
            "openai" => Ok(ImageProvider::Openai),
            "gemini" => Ok(ImageProvider::Gemini),
            "grok" => Ok(ImageProvider::Grok),
            _ => Err(format!(
                "Unknown image provider: {}. Supported: placeholder, openai, gemini, grok",
                s
            )),
        }
    }
}

impl fmt::Display for ImageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider the engine uses for copy rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyProvider {
    /// Local readability pass only.
    #[default]
    Local,
    /// Claude-assisted rewrite, local pass as fallback.
    Claude,
}

impl CopyProvider {
    /// Returns the wire identifier for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyProvider::Local => "local",
            CopyProvider::Claude => "claude",
        }
    }
}

impl FromStr for CopyProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(CopyProvider::Local),
            "claude" => Ok(CopyProvider::Claude),
            _ => Err(format!(
                "Unknown copy provider: {}. Supported: local, claude",
                s
            )),
        }
    }
}

impl fmt::Display for CopyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single deck-generation request, built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckRequest {
    /// Initiative the deck is generated for. Required, non-empty.
    pub initiative_id: String,
    /// Target buyer. Empty means "not specified".
    pub buyer_id: String,
    pub deck_type: DeckType,
    pub template_id: TemplateId,
    pub image_provider: ImageProvider,
    pub copy_provider: CopyProvider,
    /// Free-text operator intent forwarded to the engine.
    pub prompt: String,
    /// Whether the engine should draft content from context alone.
    pub auto_generate: bool,
}

impl DeckRequest {
    /// Creates a request for the given initiative with all other options at
    /// their defaults.
    pub fn new(initiative_id: impl Into<String>) -> Self {
        Self {
            initiative_id: initiative_id.into(),
            buyer_id: String::new(),
            deck_type: DeckType::default(),
            template_id: TemplateId::default(),
            image_provider: ImageProvider::default(),
            copy_provider: CopyProvider::default(),
            prompt: String::new(),
            auto_generate: false,
        }
    }

    /// Serializes the request as the engine's argv.
    ///
    /// The adapter CLI uses kebab-case flags; the engine expects snake_case.
    /// `--buyer_id` is appended only when the buyer is specified, because
    /// the engine distinguishes an absent buyer from an empty one.
    pub fn engine_args(&self) -> Vec<String> {
        let mut args = vec![
            "--initiative_id".to_string(),
            self.initiative_id.clone(),
            "--deck_type".to_string(),
            self.deck_type.as_str().to_string(),
            "--template_id".to_string(),
            self.template_id.as_str().to_string(),
            "--image_provider".to_string(),
            self.image_provider.as_str().to_string(),
            "--copy_provider".to_string(),
            self.copy_provider.as_str().to_string(),
            "--prompt".to_string(),
            self.prompt.clone(),
            "--auto_generate".to_string(),
            self.auto_generate.to_string(),
        ];
        if !self.buyer_id.is_empty() {
            args.push("--buyer_id".to_string());
            args.push(self.buyer_id.clone());
        }
        args
    }
}
