//! CLI argument definitions for the context generator.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{InvocationArgs, OutputFormat};

/// Version string with the build's git commit and timestamp.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BIZBRAIN_GIT_COMMIT"),
    " built ",
    env!("BIZBRAIN_BUILD_TIMESTAMP"),
    ")"
);

/// Generate the BizBrain context document for an AI assistant session.
///
/// Reads the brain at <BRAIN_PATH> and writes one Markdown document to stdout.
/// Intended to run from a session-start hook.
#[derive(Parser, Debug)]
#[command(name = "generate-context")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Brain root directory (falls back to BIZBRAIN_PATH)
    pub brain_path: Option<PathBuf>,

    /// Output mode: compact or full
    pub mode: Option<String>,

    /// Session zone: brain, workspaces, launchpad or external (anything else means brain)
    pub zone: Option<String>,

    /// Container holding the brain and its Workspaces/Launchpad siblings (defaults to the brain path)
    pub root_path: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    _extra: Vec<String>,

    /// Wrap the document in a JSON envelope instead of printing raw Markdown
    #[arg(long)]
    pub json: bool,

    /// Log debug details to stderr (overridden by BIZBRAIN_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Raw invocation values for the resolver.
    pub fn invocation_args(&self) -> InvocationArgs {
        InvocationArgs {
            brain_path: self.brain_path.clone(),
            mode: self.mode.clone(),
            zone: self.zone.clone(),
            root_path: self.root_path.clone(),
            output_format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Markdown
            },
        }
    }
}
