//! Context document assembly.
//!
//! One generator runs per invocation, selected by [`Zone`]:
//! - `brain` - maximal detail, plus the continuous learning block
//! - `workspaces` - code-focused, minimal
//! - `launchpad` - medium detail, the default session-start location
//! - `external` - near-minimal, config only
//!
//! Generators append to a [`Document`] and never emit a heading for a section
//! whose backing data is empty.

mod brain;
mod commands;
mod external;
mod launchpad;
mod learning;
mod workspaces;

pub use commands::{CommandRow, command_table};

use std::path::Path;

use crate::brain::Brain;
use crate::config::{BrainConfig, Mode, Zone};
use crate::models::{ActionItem, Project, Transcript};

/// Everything a generator reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub config: &'a BrainConfig,
    pub brain: &'a Brain,
    pub mode: Mode,
    pub zone: Zone,
    /// Container holding the brain and its sibling workspace/launchpad folders
    pub root_path: &'a Path,
}

impl RenderInput<'_> {
    /// Brain root as shown in the document.
    pub fn brain_label(&self) -> String {
        self.brain.root().display().to_string()
    }
}

/// Render the context document for the input's zone.
pub fn render(input: &RenderInput<'_>) -> String {
    tracing::debug!(zone = %input.zone, mode = %input.mode, "rendering context");
    match input.zone {
        Zone::Brain => brain::render(input),
        Zone::Workspaces => workspaces::render(input),
        Zone::Launchpad => launchpad::render(input),
        Zone::External => external::render(input),
    }
}

/// The document emitted when a brain has no `config.json`.
pub fn unconfigured() -> String {
    [
        "# BizBrain OS",
        "",
        "Brain not yet configured. Run `/brain setup` to scan your machine and create your knowledge brain.",
        "",
        "## Available Commands",
        "| Command | Description |",
        "|---------|-------------|",
        "| `/brain setup` | First-time setup: scan machine, pick profile, create brain |",
        "| `/brain status` | Show brain status and statistics |",
    ]
    .join("\n")
}

/// Ordered buffer of output lines.
#[derive(Debug, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// A `## ` heading.
    pub fn heading(&mut self, title: &str) {
        self.lines.push(format!("## {}", title));
    }

    /// Join with `\n`; no trailing newline is added.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// `| Command | Description |` table from [`command_table`].
pub(crate) fn push_command_table(doc: &mut Document, config: &BrainConfig) {
    doc.heading("Commands");
    doc.line("| Command | Description |");
    doc.line("|---------|-------------|");
    for row in command_table(config) {
        doc.line(format!("| {} | {} |", row.command, row.description));
    }
    doc.blank();
}

/// Unchecked task bullets under `title`; omitted when empty.
pub(crate) fn push_action_items(doc: &mut Document, title: &str, items: &[ActionItem]) {
    if items.is_empty() {
        return;
    }
    doc.heading(title);
    for item in items {
        doc.line(format!("- [ ] {}: {}", item.id_label(), item.label()));
    }
    doc.blank();
}

/// Name/status/stack table of projects with a listed status, capped at `max` rows
/// plus a trailing `N more` row.
pub(crate) fn push_listed_projects(
    doc: &mut Document,
    title: &str,
    projects: &[Project],
    max: usize,
) {
    let listed: Vec<&Project> = projects.iter().filter(|p| p.is_listed()).collect();
    if listed.is_empty() {
        return;
    }
    doc.heading(title);
    doc.line("| Project | Status | Stack |");
    doc.line("|---------|--------|-------|");
    for project in listed.iter().take(max) {
        doc.line(format!(
            "| {} | {} | {} |",
            project.name, project.status, project.stack
        ));
    }
    if listed.len() > max {
        doc.line(format!("| ... | {} more | |", listed.len() - max));
    }
    doc.blank();
}

/// Entity index block; only when the index has content and entity management is on.
pub(crate) fn push_entity_index(doc: &mut Document, summary: &str, enabled: bool) {
    if summary.is_empty() || !enabled {
        return;
    }
    doc.heading("Entity Index");
    doc.line(summary);
    doc.blank();
}

/// Recent meeting transcripts, newest first.
pub(crate) fn push_transcripts(doc: &mut Document, brain: &Brain, transcripts: &[Transcript]) {
    if transcripts.is_empty() {
        return;
    }
    let dir = brain.transcripts_dir();
    doc.heading("Recent Meetings");
    for transcript in transcripts {
        let path = dir.join(&transcript.file_name);
        match transcript.date {
            Some(date) => doc.line(format!(
                "- {}: {} (`{}`)",
                date.format("%Y-%m-%d"),
                transcript.title,
                path.display()
            )),
            None => doc.line(format!("- {} (`{}`)", transcript.title, path.display())),
        }
    }
    doc.blank();
}
