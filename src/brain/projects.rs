//! Project directory loader.

use serde_json::{Map, Value};
use std::fs;

use super::{Brain, read_json};
use crate::models::Project;

impl Brain {
    /// Every project directory under `Projects/`, in directory name order.
    ///
    /// Directories starting with `_` or `.` are skipped. A missing or malformed
    /// `_meta.json` yields a project with `unknown` status.
    pub fn projects(&self) -> Vec<Project> {
        let dir = self.projects_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "no projects directory");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('_') && !name.starts_with('.'))
            .collect();
        names.sort();

        names
            .into_iter()
            .map(|name| {
                let meta = read_json::<Map<String, Value>>(&dir.join(&name).join("_meta.json"));
                Project::from_meta(name, meta)
            })
            .collect()
    }
}
