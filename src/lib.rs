//! BizBrain context - renders a personal knowledge base ("brain") into the
//! Markdown context document injected at the start of an AI assistant session.
//!
//! This library provides the core functionality for the `generate-context` CLI:
//! reading the brain snapshot, choosing a zone template, and assembling the document.

pub mod brain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod render;

use std::path::PathBuf;

/// Library-level error type for context generation.
///
/// Only configuration problems surface here. Optional brain data never produces
/// an error; its loaders degrade to empty values instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Usage: generate-context <brain-path> [mode] [zone] [root-path]")]
    MissingBrainPath,

    #[error("Invalid brain config {}: {source}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for context generation.
pub type Result<T> = std::result::Result<T, Error>;
