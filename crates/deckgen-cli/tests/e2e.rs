//! End-to-end tests for the generate pipeline.
//!
//! The fake-engine tests drive the pipeline core without spawning anything.
//! The subprocess tests (Unix only) stand in a shell script for the Node
//! engine by pointing the interpreter override at `sh`.

use std::fs;
use std::path::Path;

use deckgen_cli::commands::generate::execute;
use deckgen_cli::commands::json_output::GenerateOutput;
use deckgen_engine::{
    DeckEngine, DeckRequest, EngineError, EngineResponse, EngineResult,
};

struct FakeEngine {
    response: EngineResponse,
}

impl FakeEngine {
    fn returning(deck: Option<&str>, images: Option<serde_json::Value>) -> Self {
        Self {
            response: EngineResponse {
                deck: deck.map(str::to_string),
                images,
            },
        }
    }
}

impl DeckEngine for FakeEngine {
    fn generate(&self, _request: &DeckRequest) -> EngineResult<EngineResponse> {
        Ok(self.response.clone())
    }
}

fn make_complete_deck(root: &Path, deck_rel: &str) {
    let deck_dir = root.join(deck_rel);
    fs::create_dir_all(deck_dir.join("slides")).unwrap();
    fs::create_dir_all(deck_dir.join("assets")).unwrap();
    fs::write(deck_dir.join("deck.json"), "{}").unwrap();
    fs::write(deck_dir.join("index.html"), "<!doctype html>").unwrap();
}

#[test]
fn fake_engine_success_report() {
    let dir = tempfile::tempdir().unwrap();
    make_complete_deck(dir.path(), "out/INIT-1");

    let engine = FakeEngine::returning(Some("out/INIT-1"), Some(serde_json::json!(3)));
    let request = DeckRequest::new("INIT-1");

    let output = execute(&engine, dir.path(), &request).unwrap();
    assert_eq!(
        output,
        GenerateOutput::success("out/INIT-1", Some(serde_json::json!(3)))
    );
}

#[test]
fn fake_engine_images_default_to_unknown() {
    let dir = tempfile::tempdir().unwrap();
    make_complete_deck(dir.path(), "out/INIT-1");

    let engine = FakeEngine::returning(Some("out/INIT-1"), None);
    let output = execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap();
    assert_eq!(output.images, serde_json::json!("unknown"));
}

#[test]
fn fake_engine_missing_slides_fails_naming_slides() {
    let dir = tempfile::tempdir().unwrap();
    make_complete_deck(dir.path(), "out/INIT-1");
    fs::remove_dir_all(dir.path().join("out/INIT-1/slides")).unwrap();

    let engine = FakeEngine::returning(Some("out/INIT-1"), Some(serde_json::json!(3)));
    let err = execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("slides"));
    assert!(!message.contains("assets"));
    assert!(!message.contains("deck.json"));
    assert!(!message.contains("index.html"));
}

#[test]
fn fake_engine_no_deck_field_fails() {
    let dir = tempfile::tempdir().unwrap();
    let engine = FakeEngine::returning(None, None);

    let err = execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap_err();
    assert!(matches!(err, EngineError::NoDeckProduced));
    assert_eq!(err.to_string(), "engine returned no deck path");
}

#[test]
fn fake_engine_empty_deck_field_fails() {
    let dir = tempfile::tempdir().unwrap();
    let engine = FakeEngine::returning(Some(""), None);

    let err = execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap_err();
    assert!(matches!(err, EngineError::NoDeckProduced));
}

#[cfg(unix)]
mod subprocess {
    use super::*;
    use deckgen_engine::{EngineConfig, NodeEngine};
    use std::os::unix::fs::PermissionsExt;

    /// Writes a stub engine script and returns a NodeEngine that runs it
    /// through `sh` instead of `node`.
    fn stub_engine(root: &Path, body: &str) -> NodeEngine {
        let script = root.join("engine.sh");
        fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        NodeEngine::with_config(
            EngineConfig::with_workspace_root(root)
                .node_path("/bin/sh")
                .script_path("engine.sh")
                .timeout_secs(5),
        )
    }

    fn guard_env() -> bool {
        if std::env::var_os("DECKGEN_ENGINE_SCRIPT").is_some() {
            eprintln!("DECKGEN_ENGINE_SCRIPT is set; skipping subprocess test");
            return false;
        }
        true
    }

    #[test]
    fn subprocess_success_end_to_end() {
        if !guard_env() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        make_complete_deck(dir.path(), "out/INIT-1");
        let engine = stub_engine(
            dir.path(),
            r#"echo '{"deck": "out/INIT-1", "images": 3}'"#,
        );

        let output = execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap();
        assert!(output.ok);
        assert_eq!(output.deck, "out/INIT-1");
        assert_eq!(output.images, serde_json::json!(3));
    }

    #[test]
    fn subprocess_receives_translated_flags_without_buyer_id() {
        if !guard_env() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        make_complete_deck(dir.path(), "out/INIT-1");
        // Record the argv the engine actually received.
        let engine = stub_engine(
            dir.path(),
            r#"printf '%s\n' "$@" > argv.txt
echo '{"deck": "out/INIT-1"}'"#,
        );

        execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap();

        let argv = fs::read_to_string(dir.path().join("argv.txt")).unwrap();
        let lines: Vec<&str> = argv.lines().collect();
        assert!(lines.contains(&"--initiative_id"));
        assert!(lines.contains(&"INIT-1"));
        assert!(lines.contains(&"--deck_type"));
        assert!(lines.contains(&"--auto_generate"));
        assert!(lines.contains(&"false"));
        assert!(!lines.contains(&"--buyer_id"));
    }

    #[test]
    fn subprocess_receives_buyer_id_when_set() {
        if !guard_env() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        make_complete_deck(dir.path(), "out/INIT-1");
        let engine = stub_engine(
            dir.path(),
            r#"printf '%s\n' "$@" > argv.txt
echo '{"deck": "out/INIT-1"}'"#,
        );

        let mut request = DeckRequest::new("INIT-1");
        request.buyer_id = "BUY-7".to_string();
        execute(&engine, dir.path(), &request).unwrap();

        let argv = fs::read_to_string(dir.path().join("argv.txt")).unwrap();
        let lines: Vec<&str> = argv.lines().collect();
        let idx = lines.iter().position(|l| *l == "--buyer_id").unwrap();
        assert_eq!(lines[idx + 1], "BUY-7");
    }

    #[test]
    fn subprocess_verbose_stderr_still_succeeds() {
        if !guard_env() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        make_complete_deck(dir.path(), "out/INIT-1");
        // Well past the 64 KiB pipe buffer on stderr before the report.
        let engine = stub_engine(
            dir.path(),
            r#"i=0
while [ $i -lt 4096 ]; do
  echo 'engine diagnostics: ................................................' 1>&2
  i=$((i+1))
done
echo '{"deck": "out/INIT-1", "images": 3}'"#,
        );

        let output = execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap();
        assert!(output.ok);
        assert_eq!(output.images, serde_json::json!(3));
    }

    #[test]
    fn subprocess_failure_surfaces_stderr_text() {
        if !guard_env() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let engine = stub_engine(
            dir.path(),
            r#"echo 'initiative not found' 1>&2
exit 1"#,
        );

        let err = execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap_err();
        assert_eq!(err.to_string(), "initiative not found");
    }

    #[test]
    fn subprocess_failure_falls_back_to_stdout_text() {
        if !guard_env() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let engine = stub_engine(
            dir.path(),
            r#"echo 'partial log line'
exit 2"#,
        );

        let err = execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap_err();
        assert_eq!(err.to_string(), "partial log line");
    }

    #[test]
    fn subprocess_silent_failure_uses_fixed_fallback() {
        if !guard_env() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let engine = stub_engine(dir.path(), "exit 3");

        let err = execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap_err();
        assert_eq!(err.to_string(), "engine command failed");
    }

    #[test]
    fn subprocess_malformed_json_is_parse_error() {
        if !guard_env() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let engine = stub_engine(dir.path(), "echo 'deck written to out/INIT-1'");

        let err = execute(&engine, dir.path(), &DeckRequest::new("INIT-1")).unwrap_err();
        assert!(matches!(err, EngineError::ResponseParse(_)));
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn subprocess_hang_is_killed_after_timeout() {
        if !guard_env() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("engine.sh");
        fs::write(&script, "#!/bin/sh\nsleep 30\n").unwrap();
        let engine = NodeEngine::with_config(
            EngineConfig::with_workspace_root(dir.path())
                .node_path("/bin/sh")
                .script_path("engine.sh")
                .timeout_secs(1),
        );

        let err = engine.generate(&DeckRequest::new("INIT-1")).unwrap_err();
        assert!(matches!(err, EngineError::EngineTimeout { timeout_secs: 1 }));
    }
}
