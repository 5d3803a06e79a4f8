//! Continuous learning block, appended to brain zone output only.
//!
//! The static part tells the assistant what to record; the dynamic part shows
//! recent activity. Each dynamic piece is loaded independently and skipped when
//! empty.

use super::{Document, RenderInput};
use crate::config::behaviors;

const MAX_UNTRACKED_REPOS: usize = 5;
const MAX_SUMMARIES: usize = 3;
const SUMMARY_PREVIEW_LINES: usize = 8;
const MAX_DECISIONS: usize = 3;
const DECISION_PREVIEW_LINES: usize = 4;

pub(super) fn push_learning_block(doc: &mut Document, input: &RenderInput<'_>) {
    let config = input.config;
    let brain = input.brain;

    doc.heading("Continuous Learning");
    doc.line(
        "**ACTIVE.** Record what you learn in this brain as you work. Do not wait to be asked.",
    );
    if config.behavior_enabled(behaviors::ACTION_ITEM_EXTRACTION) {
        doc.line(
            "- **Action Items**: Tasks, follow-ups and commitments mentioned in conversation -> add to `Operations/todos/`",
        );
    }
    if config.behavior_enabled(behaviors::DECISION_LOGGING) {
        doc.line(
            "- **Decisions**: Decisions made during the session -> append a `## YYYY-MM-DD <title>` entry to `Knowledge/decisions/<topic>.md`",
        );
    }
    doc.lines([
        "- **Project Status**: Status, stack or repo changes -> update `Projects/<name>/_meta.json`",
        "- **New Repos**: Work in a repository not tracked under `Projects/` -> offer to create a project for it",
        "- **Session Summary**: Before the session ends -> write `Operations/learning/summaries/YYYY-MM-DD-<topic>.md`",
        "- **Relationships**: New facts about people or companies -> update their entity record",
    ]);
    doc.blank();

    let repos = brain.untracked_repos(MAX_UNTRACKED_REPOS);
    if !repos.is_empty() {
        doc.line("### Untracked Repos");
        doc.line("Detected on this machine but not tracked in the brain. Offer to add them:");
        for repo in &repos {
            let name = if repo.name.is_empty() {
                &repo.path
            } else {
                &repo.name
            };
            if repo.detected_at.is_empty() {
                doc.line(format!("- **{}**: `{}`", name, repo.path));
            } else {
                doc.line(format!(
                    "- **{}**: `{}` (detected {})",
                    name, repo.path, repo.detected_at
                ));
            }
        }
        doc.blank();
    }

    if let Some(session) = brain.last_session() {
        doc.line("### Last Session");
        if let Some(end) = session.session_end.as_deref().filter(|s| !s.is_empty()) {
            doc.line(format!("- Ended: {}", end));
        }
        if let Some(heartbeats) = session.heartbeats {
            doc.line(format!("- Tool uses: {}", heartbeats));
        }
        doc.blank();
    }

    let summaries = brain.session_summaries(MAX_SUMMARIES, SUMMARY_PREVIEW_LINES);
    if !summaries.is_empty() {
        doc.line("### Recent Session Summaries");
        let previews: Vec<&str> = summaries.iter().map(|s| s.preview.as_str()).collect();
        doc.line(previews.join("\n\n"));
        doc.blank();
    }

    let decisions = brain.decisions(MAX_DECISIONS, DECISION_PREVIEW_LINES);
    if !decisions.is_empty() {
        doc.line("### Recent Decisions");
        for decision in &decisions {
            doc.line(format!("**{}**", decision.topic));
            doc.lines(decision.lines.iter().map(String::as_str));
            doc.blank();
        }
    }
}
