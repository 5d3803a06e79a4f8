//! Launchpad zone: the default session-start location. Medium detail with the
//! full entity watchdog rule set.

use super::{
    Document, RenderInput, push_action_items, push_command_table, push_entity_index,
    push_listed_projects, push_transcripts,
};
use crate::config::{WatchdogMode, features};

const MAX_PROJECTS: usize = 15;
const MAX_ACTION_ITEMS: usize = 10;
const ENTITY_INDEX_LINES: usize = 40;
const MAX_TRANSCRIPTS: usize = 3;

pub(super) fn render(input: &RenderInput<'_>) -> String {
    let config = input.config;
    let brain = input.brain;
    let profile = &config.profile;
    let mut doc = Document::new();

    doc.line(format!("# {} Brain — Launchpad", profile.business_name()));
    doc.blank();
    doc.line(format!("> Owner: {}", profile.user_name()));
    doc.line(format!("> Brain: {}", input.brain_label()));
    doc.blank();

    push_command_table(&mut doc, config);
    push_brain_structure(&mut doc, input);

    doc.heading("Recording to the Brain");
    doc.lines([
        "- Facts about people or companies -> their entity record under `Entities/`",
        "- Decisions -> a new `## ` entry in `Knowledge/decisions/<topic>.md`",
        "- Tasks and follow-ups -> `Operations/todos/`",
        "- Project status, stack or repo changes -> `Projects/<name>/_meta.json`",
        "- Always write to the brain path above, never to the current directory",
    ]);
    doc.blank();

    push_listed_projects(&mut doc, "Active Projects", &brain.projects(), MAX_PROJECTS);
    push_action_items(
        &mut doc,
        "Open Action Items",
        &brain.action_items(MAX_ACTION_ITEMS),
    );

    let entity_management = config.feature(features::ENTITY_MANAGEMENT);
    push_entity_index(
        &mut doc,
        &brain.entity_summary(ENTITY_INDEX_LINES),
        entity_management,
    );
    if entity_management {
        push_watchdog_rules(&mut doc, input, config.watchdog_mode());
    }

    if config.feature(features::MEETING_TRANSCRIPTION) {
        push_transcripts(&mut doc, brain, &brain.transcripts(MAX_TRANSCRIPTS));
    }

    doc.heading("Auto-Capture");
    doc.lines([
        "- Action items from conversation -> todo list",
        "- Decisions -> decision log",
        "- People and company updates -> entity records",
        "- Session summary -> `Operations/learning/summaries/` when the session ends",
    ]);
    doc.blank();

    doc.finish()
}

/// Folder reference; feature-backed folders appear only when their feature is on.
fn push_brain_structure(doc: &mut Document, input: &RenderInput<'_>) {
    let config = input.config;
    doc.heading("Brain Structure");
    doc.line("| Folder | Contents |");
    doc.line("|--------|----------|");
    doc.line("| `Knowledge/` | Reference notes, decisions, playbooks |");
    doc.line("| `Operations/` | Todos, meetings, session learning |");
    if config.feature(features::ENTITY_MANAGEMENT) {
        doc.line("| `Entities/` | People, companies, and the entity index |");
    }
    if config.feature(features::PROJECT_TRACKING) {
        doc.line("| `Projects/` | One folder per project with `_meta.json` |");
    }
    if config.feature(features::COMMUNICATIONS) {
        doc.line("| `Communications/` | Email, chat, and message history |");
    }
    doc.blank();
}

/// Full watchdog rules for both modes, with the configured one marked active.
fn push_watchdog_rules(doc: &mut Document, input: &RenderInput<'_>, mode: WatchdogMode) {
    let (auto_marker, ask_marker) = match mode {
        WatchdogMode::AutoUpdate => (" (ACTIVE)", ""),
        WatchdogMode::AskFirst => ("", " (ACTIVE)"),
        WatchdogMode::Disabled => return,
    };

    doc.heading("Entity Watchdog");
    doc.line("Watch every conversation for mentions of people, companies, and organizations.");
    doc.line(format!(
        "Entity Index: `{}`",
        input.brain.entity_index_path().display()
    ));
    doc.blank();
    doc.line(format!("**Auto-update mode**{}", auto_marker));
    doc.lines([
        "- New info about a known entity -> update their record, then briefly tell the user what changed",
        "- Unknown entity mentioned with substance -> ask the user before creating a record",
        "- Passing mentions with no new facts -> no action",
        "- Keep the entity index in sync when a record is created or renamed",
    ]);
    doc.blank();
    doc.line(format!("**Ask-first mode**{}", ask_marker));
    doc.lines([
        "- Detect entity mentions the same way",
        "- Summarize the proposed change and wait for confirmation before writing",
        "- Never create or update a record without a yes from the user",
    ]);
    doc.blank();
}
