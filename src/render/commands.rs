//! Slash-command table builder.

use crate::config::{BrainConfig, features};

/// One row of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRow {
    pub command: &'static str,
    pub description: &'static str,
}

const fn row(command: &'static str, description: &'static str) -> CommandRow {
    CommandRow {
        command,
        description,
    }
}

/// Rows present for every brain.
const BASE_COMMANDS: [CommandRow; 3] = [
    row("`/brain`", "Brain status, scan, configure, profiles"),
    row("`/knowledge <topic>`", "Load specific brain knowledge"),
    row("`/todo`", "View and manage tasks"),
];

/// Rows appended when their feature is on, in this order.
const FEATURE_COMMANDS: [(&str, CommandRow); 8] = [
    (
        features::ENTITY_MANAGEMENT,
        row("`/entity <name>`", "Look up or add an entity"),
    ),
    (
        features::GSD_WORKFLOW,
        row("`/gsd`", "Project management workflow"),
    ),
    (
        features::TIME_TRACKING,
        row("`/hours`", "Time tracking summary"),
    ),
    (
        features::CONTENT_PIPELINE,
        row("`/content`", "Content pipeline management"),
    ),
    (
        features::COMMUNICATIONS,
        row("`/comms`", "Unified communications"),
    ),
    (
        features::INTAKE_PROCESSING,
        row("`/intake`", "Process files dropped into the intake folder"),
    ),
    (
        features::OUTREACH_ENGINE,
        row("`/outreach`", "Outreach campaigns and follow-up sequences"),
    ),
    (
        features::MEETING_TRANSCRIPTION,
        row("`/meetings`", "Meeting transcripts and summaries"),
    ),
];

/// Command rows for a brain: the base rows, then one per enabled feature.
///
/// The table is the same in every zone that shows it.
pub fn command_table(config: &BrainConfig) -> Vec<CommandRow> {
    BASE_COMMANDS
        .into_iter()
        .chain(
            FEATURE_COMMANDS
                .into_iter()
                .filter(|(feature, _)| config.feature(feature))
                .map(|(_, row)| row),
        )
        .collect()
}
