//! Error types for the Sentinel engine adapter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine adapter operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while invoking the engine or validating its output.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Node.js executable not found.
    #[error("Node.js executable not found. Ensure node is installed and in PATH, or set DECKGEN_NODE environment variable")]
    NodeNotFound,

    /// Engine script not found before spawn.
    #[error("Engine script not found at: {path}")]
    ScriptNotFound { path: PathBuf },

    /// Failed to spawn the engine process.
    #[error("Failed to spawn engine process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// Engine process timed out and was killed.
    #[error("Engine process timed out after {timeout_secs} seconds")]
    EngineTimeout { timeout_secs: u64 },

    /// Engine process exited with non-zero status. The message is the
    /// engine's own stderr text when non-empty, else its stdout text,
    /// else a fixed fallback.
    #[error("{message}")]
    EngineFailed { message: String },

    /// Engine stdout was not a valid JSON document.
    #[error("Failed to parse engine response: {0}")]
    ResponseParse(#[source] serde_json::Error),

    /// Engine response carried no deck path.
    #[error("engine returned no deck path")]
    NoDeckProduced,

    /// One or more expected deck artifacts are absent. All missing entries
    /// are aggregated before this error is raised.
    #[error("missing outputs: {}", missing.join(", "))]
    MissingOutputs { missing: Vec<String> },

    /// IO error during filesystem checks.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Builds the non-zero-exit error from the captured output streams.
    ///
    /// Preference order: stderr text, stdout text, fixed fallback string.
    pub fn engine_failed(stdout: &str, stderr: &str) -> Self {
        let stderr = stderr.trim();
        let stdout = stdout.trim();
        let message = if !stderr.is_empty() {
            stderr.to_string()
        } else if !stdout.is_empty() {
            stdout.to_string()
        } else {
            "engine command failed".to_string()
        };
        Self::EngineFailed { message }
    }
}
