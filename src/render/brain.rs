//! Brain zone: the session is running inside the knowledge base itself.

use super::{
    Document, RenderInput, learning, push_action_items, push_command_table, push_entity_index,
    push_transcripts,
};
use crate::config::{WatchdogMode, features};

const MAX_ACTION_ITEMS: usize = 10;
const ENTITY_INDEX_LINES: usize = 60;
const MAX_TRANSCRIPTS: usize = 5;

pub(super) fn render(input: &RenderInput<'_>) -> String {
    let config = input.config;
    let brain = input.brain;
    let profile = &config.profile;
    let mut doc = Document::new();

    doc.line(format!("# {} Brain — BizBrain OS", profile.business_name()));
    doc.blank();
    doc.line(format!("> Owner: {}", profile.user_name()));
    if let Some(business_type) = profile.business_type() {
        doc.line(format!("> Type: {}", business_type));
    }
    if let Some(industry) = profile.industry() {
        doc.line(format!("> Industry: {}", industry));
    }
    doc.line(format!("> Brain: {}", input.brain_label()));
    if input.mode.is_full() {
        doc.line(format!("> Mode: {} | Zone: {}", input.mode, input.zone));
    }
    doc.blank();

    let active_features = config.active_features();
    if !active_features.is_empty() {
        doc.heading("Active Features");
        doc.lines(active_features.iter().map(|f| format!("- {}", f)));
        doc.blank();
    }

    push_command_table(&mut doc, config);

    let projects = brain.projects();
    if !projects.is_empty() {
        doc.heading("Active Projects");
        doc.line("| Project | Status | Stack | Repo |");
        doc.line("|---------|--------|-------|------|");
        for project in &projects {
            doc.line(format!(
                "| {} | {} | {} | {} |",
                project.name, project.status, project.stack, project.repo_path
            ));
        }
        doc.blank();
    }

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

    if config.feature(features::MEETING_TRANSCRIPTION) {
        push_transcripts(&mut doc, brain, &brain.transcripts(MAX_TRANSCRIPTS));
    }

    let behaviors = config.active_behaviors();
    if !behaviors.is_empty() {
        doc.heading("Active Auto-Behaviors");
        doc.lines(
            behaviors
                .iter()
                .map(|(name, mode)| format!("- **{}**: {}", name, mode)),
        );
        doc.blank();
    }

    if entity_management {
        push_watchdog(&mut doc, input, config.watchdog_mode());
    }

    if let Some(style) = config.preferences.comm_style() {
        doc.heading("Communication Style");
        doc.line(format!("Preferred: **{}**", style));
        doc.blank();
    }

    let scan = &config.scan_cache;
    if let Some(last_scan) = scan.last_scan_at() {
        doc.heading("Brain Statistics");
        doc.line(format!("- Last scan: {}", last_scan));
        doc.line(format!("- Projects: {}", scan.project_count()));
        doc.line(format!("- Entities: {}", scan.entity_count()));
        doc.line(format!("- Services: {}", scan.service_count()));
        doc.blank();
    }

    learning::push_learning_block(&mut doc, input);

    doc.finish()
}

/// Short watchdog notice; the launchpad carries the full rule set.
fn push_watchdog(doc: &mut Document, input: &RenderInput<'_>, mode: WatchdogMode) {
    match mode {
        WatchdogMode::AutoUpdate => {
            doc.heading("Entity Watchdog");
            doc.line(
                "**ACTIVE — Auto-update mode.** Watch every conversation for entity mentions.",
            );
            doc.line(
                "- New info about known entity -> update their brain record, briefly notify user",
            );
            doc.line("- Unknown entity mentioned with substance -> ask user before creating");
            doc.line(format!(
                "- Entity Index: `{}`",
                input.brain.entity_index_path().display()
            ));
            doc.blank();
        }
        WatchdogMode::AskFirst => {
            doc.heading("Entity Watchdog");
            doc.line(
                "**ACTIVE — Ask-first mode.** Detect entity mentions but confirm before updating.",
            );
            doc.blank();
        }
        WatchdogMode::Disabled => {}
    }
}
