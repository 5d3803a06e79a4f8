//! Read-only views over brain files.
//!
//! This module defines the records the loaders produce:
//! - `ActionItem` - An entry of the aggregated todo list
//! - `Project` - A project directory with its `_meta.json` merged in
//! - `UntrackedRepo` - A repository detected on disk but not yet tracked
//! - `LastSession` - Summary of the previous assistant session
//! - `SessionSummary` - Preview of a written session summary
//! - `DecisionPreview` - The latest entry of a decision log
//! - `Transcript` - A recorded meeting transcript
//!
//! Every optional field has its default resolved at load time, so renderers
//! never repeat fallback logic.

pub mod json;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use json::{deserialize_truthy, display_value, truthy};

/// Status given to projects with no readable status.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Statuses shown in the workspaces and launchpad project tables.
pub const LISTED_STATUSES: &[&str] = &["active", "discovered", UNKNOWN_STATUS];

/// An entry of `Operations/todos/aggregated-todos.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Item identifier; may be a string or a number
    #[serde(default)]
    pub id: Value,

    #[serde(default)]
    pub text: Value,

    /// Used when `text` is falsy
    #[serde(default)]
    pub description: Value,

    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub completed: bool,
}

impl ActionItem {
    pub fn id_label(&self) -> String {
        display_value(&self.id)
    }

    /// `text`, falling back to `description`.
    pub fn label(&self) -> String {
        if truthy(&self.text) {
            display_value(&self.text)
        } else {
            display_value(&self.description)
        }
    }
}

/// A project directory under `Projects/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    /// `name` from metadata when set, else the directory name
    pub name: String,

    /// `status` from metadata, `unknown` when missing or empty
    pub status: String,

    /// `stack` from metadata; arrays joined with `, `
    pub stack: String,

    /// `repoPath` from metadata
    pub repo_path: String,

    /// The full `_meta.json` object
    pub meta: Map<String, Value>,
}

impl Project {
    /// Build a project from its directory name and parsed metadata, if any.
    ///
    /// A non-empty metadata `name` overrides the directory name.
    pub fn from_meta(dir_name: impl Into<String>, meta: Option<Map<String, Value>>) -> Self {
        let meta = meta.unwrap_or_default();
        let field = |key: &str| meta.get(key).map(display_value).unwrap_or_default();

        let name = match meta.get("name") {
            Some(name) if truthy(name) => display_value(name),
            _ => dir_name.into(),
        };

        let status = field("status");
        let status = if status.is_empty() {
            UNKNOWN_STATUS.to_string()
        } else {
            status
        };
        let stack = field("stack");
        let repo_path = field("repoPath");

        Self {
            name,
            status,
            stack,
            repo_path,
            meta,
        }
    }

    /// Whether the project belongs in the workspaces/launchpad tables.
    pub fn is_listed(&self) -> bool {
        LISTED_STATUSES.contains(&self.status.as_str())
    }
}

/// A record under `.bizbrain/untracked-repos/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UntrackedRepo {
    pub name: String,
    pub path: String,
    pub detected_at: String,
}

/// `.bizbrain/last-session.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LastSession {
    pub session_end: Option<String>,

    /// Tool uses recorded during the session
    pub heartbeats: Option<u64>,
}

impl LastSession {
    pub fn is_empty(&self) -> bool {
        self.session_end.as_deref().is_none_or(str::is_empty) && self.heartbeats.is_none()
    }
}

/// Leading lines of a file in `Operations/learning/summaries/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub file_name: String,
    pub preview: String,
}

/// The most recent `## ` entry of a file in `Knowledge/decisions/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionPreview {
    /// File stem, e.g. `pricing` for `pricing.md`
    pub topic: String,
    pub lines: Vec<String>,
}

/// A file in `Operations/meetings/transcripts/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub file_name: String,

    /// Parsed from a `YYYY-MM-DD-` filename prefix
    pub date: Option<NaiveDate>,

    /// First `# ` heading of the file, else the filename slug
    pub title: String,
}

impl Transcript {
    /// Split `2026-01-31-weekly-sync.md` into its date and `weekly-sync`.
    pub fn parse_file_name(file_name: &str) -> (Option<NaiveDate>, String) {
        let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
        if let (Some(prefix), Some(rest)) = (stem.get(..10), stem.get(10..)) {
            if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
                let slug = rest.strip_prefix('-').unwrap_or(rest);
                let slug = if slug.is_empty() { prefix } else { slug };
                return (Some(date), slug.to_string());
            }
        }
        (None, stem.to_string())
    }
}
