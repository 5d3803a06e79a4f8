//! Common test utilities for generate-context integration tests.
//!
//! Provides `TestBrain`, a throwaway brain directory plus a `Command` for the
//! binary that never inherits the caller's `BIZBRAIN_*` environment.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
pub use tempfile::TempDir;

/// A temporary brain directory.
pub struct TestBrain {
    pub dir: TempDir,
}

impl TestBrain {
    /// An empty, unconfigured brain.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A brain with the given `config.json`.
    pub fn configured(config: &str) -> Self {
        let brain = Self::new();
        brain.write("config.json", config);
        brain
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> String {
        self.dir.path().display().to_string()
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

    /// Write a project directory with the given `_meta.json`.
    pub fn project(&self, name: &str, meta: &str) {
        self.write(&format!("Projects/{name}/_meta.json"), meta);
    }

    /// Write the aggregated todo list from `(id, text, completed)` tuples.
    pub fn todos(&self, items: &[(&str, &str, bool)]) {
        let items: Vec<String> = items
            .iter()
            .map(|(id, text, completed)| {
                format!(r#"{{"id": "{id}", "text": "{text}", "completed": {completed}}}"#)
            })
            .collect();
        self.write(
            "Operations/todos/aggregated-todos.json",
            &format!(r#"{{"items": [{}]}}"#, items.join(",")),
        );
    }

    /// A Command for the binary with a clean environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_generate-context"));
        cmd.env_remove("BIZBRAIN_PATH");
        cmd.env_remove("BIZBRAIN_LOG");
        cmd
    }

    /// Run against this brain with extra positional args and return stdout.
    pub fn generate(&self, args: &[&str]) -> String {
        let output = self
            .cmd()
            .arg(self.path())
            .args(args)
            .output()
            .expect("Failed to run generate-context");
        assert!(
            output.status.success(),
            "generate-context failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}

impl Default for TestBrain {
    fn default() -> Self {
        Self::new()
    }
}
