//! Brain layout and fail-soft loaders.
//!
//! A brain is a directory tree owned by other tools. This module knows where
//! each file lives and reads them without ever failing: a missing file, an
//! unreadable file or malformed content all collapse to an empty value, and
//! the cause is logged at `debug` level.
//!
//! ```text
//! <brain>/
//!   config.json
//!   .bizbrain/state.json
//!   .bizbrain/last-session.json
//!   .bizbrain/untracked-repos/*.json
//!   Entities/People/ENTITY-INDEX.md
//!   Operations/todos/aggregated-todos.json
//!   Operations/meetings/transcripts/*.md
//!   Operations/learning/summaries/*.md
//!   Knowledge/decisions/*.md
//!   Projects/<name>/_meta.json
//! ```
//!
//! Recency for transcripts and summaries comes from filename order, which
//! assumes a `YYYY-MM-DD-` prefix. Modification times are never consulted, so
//! an undated name like `notes.md` ranks as newer than every dated file.

mod activity;
mod entities;
mod projects;
mod todos;

use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A brain rooted at a directory.
#[derive(Debug, Clone)]
pub struct Brain {
    root: PathBuf,
}

impl Brain {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Whether the brain has been set up.
    pub fn is_configured(&self) -> bool {
        self.config_path().exists()
    }

    pub fn internal_dir(&self) -> PathBuf {
        self.root.join(".bizbrain")
    }

    pub fn state_path(&self) -> PathBuf {
        self.internal_dir().join("state.json")
    }

    pub fn last_session_path(&self) -> PathBuf {
        self.internal_dir().join("last-session.json")
    }

    pub fn untracked_repos_dir(&self) -> PathBuf {
        self.internal_dir().join("untracked-repos")
    }

    pub fn entity_index_path(&self) -> PathBuf {
        self.root
            .join("Entities")
            .join("People")
            .join("ENTITY-INDEX.md")
    }

    pub fn todos_path(&self) -> PathBuf {
        self.root
            .join("Operations")
            .join("todos")
            .join("aggregated-todos.json")
    }

    pub fn transcripts_dir(&self) -> PathBuf {
        self.root
            .join("Operations")
            .join("meetings")
            .join("transcripts")
    }

    pub fn summaries_dir(&self) -> PathBuf {
        self.root
            .join("Operations")
            .join("learning")
            .join("summaries")
    }

    pub fn decisions_dir(&self) -> PathBuf {
        self.root.join("Knowledge").join("decisions")
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.root.join("Projects")
    }
}

/// Read a text file, or `None` if it is missing or unreadable.
pub(crate) fn read_text(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping unreadable file");
            None
        }
    }
}

/// Read and parse a JSON file, or `None` if it is missing, unreadable or malformed.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = read_text(path)?;
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping malformed JSON");
            None
        }
    }
}

/// The first `max` lines of `content`, split on `\n`.
pub(crate) fn leading_lines(content: &str, max: usize) -> Vec<&str> {
    content.split('\n').take(max).collect()
}

/// Names of regular files in `dir` with the given extension, sorted ascending.
///
/// A missing or unreadable directory yields an empty list.
pub(crate) fn files_with_extension(dir: &Path, extension: &str) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
            }
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| {
            Path::new(name)
                .extension()
                .is_some_and(|ext| ext == extension)
        })
        .collect();
    names.sort();
    names
}

/// The `max` most recent Markdown files in `dir`, newest first by filename.
pub(crate) fn recent_markdown(dir: &Path, max: usize) -> Vec<String> {
    let mut names = files_with_extension(dir, "md");
    names.reverse();
    names.truncate(max);
    names
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    use super::Brain;

    /// A temporary brain directory for loader tests.
    pub struct TempBrain {
        pub dir: TempDir,
        pub brain: Brain,
    }

    impl TempBrain {
        pub fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let brain = Brain::new(dir.path());
            Self { dir, brain }
        }

        /// Write `content` at `relative`, creating parent directories.
        pub fn write(&self, relative: &str, content: &str) {
            let path = self.dir.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }

        pub fn mkdir(&self, relative: &str) {
            fs::create_dir_all(self.dir.path().join(relative)).unwrap();
        }

        pub fn path(&self) -> &Path {
            self.dir.path()
        }
    }
}
