//! Command implementations for the context generator CLI.
//!
//! There is a single operation, `generate`: resolve the brain, fall back to the
//! "not configured" document when it has no config, otherwise load the config
//! and render the zone's document.

use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::brain::Brain;
use crate::config::{BrainConfig, Invocation, Mode, Zone};
use crate::render::{self, RenderInput};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Output of `generate`.
#[derive(Debug, Clone, Serialize)]
pub struct ContextResult {
    pub zone: Zone,
    pub mode: Mode,
    pub brain_path: String,
    /// False when the brain has no `config.json`
    pub configured: bool,
    /// The Markdown context document
    pub context: String,
    /// `.bizbrain/state.json`, when present and parseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_state: Option<Value>,
}

impl CommandResult for ContextResult {
    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }

    fn to_human(&self) -> String {
        self.context.clone()
    }
}

/// Generate the context document for an invocation.
///
/// Fails only when `config.json` exists but cannot be read or parsed.
pub fn generate(invocation: &Invocation) -> Result<ContextResult> {
    let brain = Brain::new(invocation.brain_path());
    let brain_path = brain.root().display().to_string();

    if !brain.is_configured() {
        tracing::debug!(brain = %brain_path, "no config.json, emitting setup document");
        return Ok(ContextResult {
            zone: invocation.zone(),
            mode: invocation.mode(),
            brain_path,
            configured: false,
            context: render::unconfigured(),
            session_state: None,
        });
    }

    let config = BrainConfig::load(&brain.config_path())?;
    let session_state = brain.state();

    let context = render::render(&RenderInput {
        config: &config,
        brain: &brain,
        mode: invocation.mode(),
        zone: invocation.zone(),
        root_path: invocation.root_path(),
    });

    Ok(ContextResult {
        zone: invocation.zone(),
        mode: invocation.mode(),
        brain_path,
        configured: true,
        context,
        session_state,
    })
}
