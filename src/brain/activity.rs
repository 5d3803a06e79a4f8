//! Loaders for recent activity: session state, untracked repos, session
//! summaries, decision logs and meeting transcripts.

use serde_json::Value;
use std::path::Path;

use super::{Brain, files_with_extension, leading_lines, read_json, read_text, recent_markdown};
use crate::models::{DecisionPreview, LastSession, SessionSummary, Transcript, UntrackedRepo};

/// Heading separator between entries of a decision log.
const DECISION_SEPARATOR: &str = "\n## ";

impl Brain {
    /// `.bizbrain/state.json` as an opaque value.
    pub fn state(&self) -> Option<Value> {
        read_json(&self.state_path())
    }

    /// Up to `max` records from `.bizbrain/untracked-repos/`, in filename order.
    pub fn untracked_repos(&self, max: usize) -> Vec<UntrackedRepo> {
        let dir = self.untracked_repos_dir();
        files_with_extension(&dir, "json")
            .iter()
            .filter_map(|name| read_json::<UntrackedRepo>(&dir.join(name)))
            .take(max)
            .collect()
    }

    /// `.bizbrain/last-session.json`, if it carries anything.
    pub fn last_session(&self) -> Option<LastSession> {
        read_json::<LastSession>(&self.last_session_path()).filter(|s| !s.is_empty())
    }

    /// Previews of the `max` most recent session summaries, newest first.
    pub fn session_summaries(&self, max: usize, preview_lines: usize) -> Vec<SessionSummary> {
        let dir = self.summaries_dir();
        recent_markdown(&dir, max)
            .into_iter()
            .filter_map(|file_name| {
                let content = read_text(&dir.join(&file_name))?;
                Some(SessionSummary {
                    preview: leading_lines(&content, preview_lines).join("\n"),
                    file_name,
                })
            })
            .collect()
    }

    /// Latest entry of each of the last `max` decision logs in filename order.
    ///
    /// Logs are expected to be a sequence of `## ` headed entries; the text after
    /// the final separator is the newest entry.
    pub fn decisions(&self, max: usize, preview_lines: usize) -> Vec<DecisionPreview> {
        let dir = self.decisions_dir();
        let names = files_with_extension(&dir, "md");
        let start = names.len().saturating_sub(max);

        names[start..]
            .iter()
            .filter_map(|file_name| {
                let content = read_text(&dir.join(file_name))?;
                let latest = content.rsplit(DECISION_SEPARATOR).next().unwrap_or("");
                Some(DecisionPreview {
                    topic: file_stem(file_name),
                    lines: leading_lines(latest, preview_lines)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                })
            })
            .collect()
    }

    /// The `max` most recent meeting transcripts, newest first.
    pub fn transcripts(&self, max: usize) -> Vec<Transcript> {
        let dir = self.transcripts_dir();
        recent_markdown(&dir, max)
            .into_iter()
            .map(|file_name| {
                let (date, slug) = Transcript::parse_file_name(&file_name);
                let title = read_text(&dir.join(&file_name))
                    .and_then(|content| first_heading(&content))
                    .unwrap_or(slug);
                Transcript {
                    file_name,
                    date,
                    title,
                }
            })
            .collect()
    }
}

fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}

/// Text of the first `# ` heading.
fn first_heading(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
}
