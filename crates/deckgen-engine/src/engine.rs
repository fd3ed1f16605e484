//! Sentinel engine subprocess runner.
//!
//! This module handles spawning the Node.js engine script as a subprocess
//! and parsing the JSON document it prints to stdout.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::request::DeckRequest;

/// Default timeout for engine execution (5 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Engine script path relative to the workspace root.
pub const DEFAULT_SCRIPT: &str = "scripts/generate_deck.js";

/// The document the engine prints to stdout.
///
/// `deck` is a path relative to the workspace root. The adapter never
/// fabricates one: a missing or empty field fails the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineResponse {
    /// Relative path to the produced deck directory.
    #[serde(default)]
    pub deck: Option<String>,
    /// Image generation status or count, as reported by the engine.
    #[serde(default)]
    pub images: Option<serde_json::Value>,
}

impl EngineResponse {
    /// Returns the deck path, failing if the engine did not report one.
    pub fn deck_path(&self) -> EngineResult<&str> {
        match self.deck.as_deref() {
            Some(p) if !p.is_empty() => Ok(p),
            _ => Err(EngineError::NoDeckProduced),
        }
    }
}

/// The narrow boundary between the adapter and the generation engine.
///
/// Production code uses [`NodeEngine`]; tests substitute a fake so the
/// pipeline is exercised without spawning a process.
pub trait DeckEngine {
    /// Runs one generation request to completion.
    fn generate(&self, request: &DeckRequest) -> EngineResult<EngineResponse>;
}

/// Configuration for the Node engine runner.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path to the Node.js executable.
    pub node_path: Option<PathBuf>,
    /// Path to the engine script, resolved against the workspace root
    /// when relative.
    pub script_path: PathBuf,
    /// Workspace root the engine runs in and writes decks under.
    pub workspace_root: PathBuf,
    /// Timeout for engine execution.
    pub timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            node_path: None,
            script_path: PathBuf::from(DEFAULT_SCRIPT),
            workspace_root: PathBuf::from("."),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl EngineConfig {
    /// Creates a config rooted at the given workspace directory.
    pub fn with_workspace_root(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            ..Default::default()
        }
    }

    /// Sets the Node.js executable path.
    pub fn node_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.node_path = Some(path.into());
        self
    }

    /// Sets the engine script path.
    pub fn script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = path.into();
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

/// The Node.js engine subprocess runner.
pub struct NodeEngine {
    config: EngineConfig,
}

impl NodeEngine {
    /// Creates a runner with default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Creates a runner with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Finds the Node.js executable.
    fn find_node(&self) -> EngineResult<PathBuf> {
        // Check config override first
        if let Some(ref path) = self.config.node_path {
            if path.exists() {
                return Ok(path.clone());
            }
        }

        // Check DECKGEN_NODE environment variable
        if let Ok(path) = std::env::var("DECKGEN_NODE") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(path);
            }
        }

        // Try to find node in PATH
        let node_names = if cfg!(windows) {
            vec!["node.exe", "node"]
        } else {
            vec!["node"]
        };

        for name in node_names {
            if let Ok(path) = which::which(name) {
                return Ok(path);
            }
        }

        // Try common installation paths
        let common_paths = if cfg!(windows) {
            vec!["C:\\Program Files\\nodejs\\node.exe"]
        } else {
            vec!["/usr/bin/node", "/usr/local/bin/node", "/opt/homebrew/bin/node"]
        };

        for path_str in common_paths {
            let path = PathBuf::from(path_str);
            if path.exists() {
                return Ok(path);
            }
        }

        Err(EngineError::NodeNotFound)
    }

    /// Resolves the engine script against the workspace root.
    fn resolve_script(&self) -> EngineResult<PathBuf> {
        // Configured path first.
        let path = if self.config.script_path.is_absolute() {
            self.config.script_path.clone()
        } else {
            self.config.workspace_root.join(&self.config.script_path)
        };
        if path.exists() {
            return Ok(path);
        }

        // Environment override (fallback).
        if let Ok(env_path) = std::env::var("DECKGEN_ENGINE_SCRIPT") {
            let env_path = PathBuf::from(env_path);
            if env_path.exists() {
                return Ok(env_path);
            }
            return Err(EngineError::ScriptNotFound { path: env_path });
        }

        Err(EngineError::ScriptNotFound { path })
    }
}

impl DeckEngine for NodeEngine {
    fn generate(&self, request: &DeckRequest) -> EngineResult<EngineResponse> {
        let node_path = self.find_node()?;
        let script = self.resolve_script()?;

        // node <script> --initiative_id <id> ... run from the workspace root
        let mut cmd = Command::new(&node_path);
        cmd.arg(&script)
            .args(request.engine_args())
            .current_dir(&self.config.workspace_root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let child = cmd.spawn().map_err(EngineError::SpawnFailed)?;

        let (status, stdout, stderr) = wait_with_timeout(child, self.config.timeout)?;

        if !status.success() {
            return Err(EngineError::engine_failed(&stdout, &stderr));
        }

        let response: EngineResponse =
            serde_json::from_str(&stdout).map_err(EngineError::ResponseParse)?;

        Ok(response)
    }
}

impl Default for NodeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Waits for the child, killing it once the timeout elapses.
///
/// Both output streams are drained on reader threads while the child runs.
/// A child that fills a pipe buffer would otherwise block on write and
/// never exit, turning a healthy verbose engine into a timeout.
fn wait_with_timeout(
    mut child: Child,
    timeout: Duration,
) -> EngineResult<(ExitStatus, String, String)> {
    let stdout_reader = spawn_stream_reader(child.stdout.take());
    let stderr_reader = spawn_stream_reader(child.stderr.take());

    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    let _ = stdout_reader.join();
                    let _ = stderr_reader.join();
                    return Err(EngineError::EngineTimeout {
                        timeout_secs: timeout.as_secs(),
                    });
                }
                std::thread::sleep(Duration::from_millis(50));
            }
            Err(e) => return Err(EngineError::SpawnFailed(e)),
        }
    };

    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();

    Ok((status, stdout, stderr))
}

/// Reads a pipe to end-of-stream on its own thread.
fn spawn_stream_reader<R>(stream: Option<R>) -> std::thread::JoinHandle<String>
where
    R: Read + Send + 'static,
{
    std::thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut stream) = stream {
            let _ = stream.read_to_string(&mut buf);
        }
        buf
    })
}
