//! Generate command implementation.
//!
//! One linear pipeline: build the request, invoke the engine, validate the
//! reported deck directory, print the report. No retry, no branching back.

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use deckgen_engine::{
    check_deck_outputs, DeckEngine, DeckRequest, EngineConfig, EngineResult, NodeEngine,
};

use super::json_output::GenerateOutput;
use crate::cli_args::Cli;

/// Run the generate pipeline with the real Node engine.
///
/// # Returns
/// Exit code 0 with the JSON report on stdout; any failure propagates to
/// the caller for single-line reporting.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let request = build_request(cli);

    let mut config = EngineConfig::with_workspace_root(&cli.workspace_root)
        .script_path(&cli.engine_script)
        .timeout_secs(cli.timeout_secs);
    if let Some(ref node) = cli.node_path {
        config = config.node_path(node);
    }
    let engine = NodeEngine::with_config(config);

    let output = execute(&engine, Path::new(&cli.workspace_root), &request)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}

/// The pipeline core, generic over the engine collaborator.
///
/// Invokes the engine, rejects responses without a deck path, checks the
/// four required artifacts, and assembles the success report.
pub fn execute(
    engine: &dyn DeckEngine,
    workspace_root: &Path,
    request: &DeckRequest,
) -> EngineResult<GenerateOutput> {
    let response = engine.generate(request)?;
    let deck_rel = response.deck_path()?.to_string();

    check_deck_outputs(workspace_root, &deck_rel)?;

    Ok(GenerateOutput::success(deck_rel, response.images))
}

/// Builds the typed request from clap-validated strings.
fn build_request(cli: &Cli) -> DeckRequest {
    DeckRequest {
        initiative_id: cli.initiative_id.clone(),
        buyer_id: cli.buyer_id.clone(),
        deck_type: cli
            .deck_type
            .parse()
            .expect("clap should have validated deck type"),
        template_id: cli
            .template_id
            .parse()
            .expect("clap should have validated template"),
        image_provider: cli
            .image_provider
            .parse()
            .expect("clap should have validated image provider"),
        copy_provider: cli
            .copy_provider
            .parse()
            .expect("clap should have validated copy provider"),
        prompt: cli.prompt.clone(),
        auto_generate: cli.auto_generate,
    }
}
