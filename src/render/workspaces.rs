//! Workspaces zone: the session is in a code workspace. Minimal and code-focused.

use super::{Document, RenderInput, push_action_items, push_listed_projects};

const MAX_PROJECTS: usize = 20;
const MAX_ACTION_ITEMS: usize = 5;

pub(super) fn render(input: &RenderInput<'_>) -> String {
    let brain = input.brain;
    let brain_label = input.brain_label();
    let mut doc = Document::new();

    doc.line(format!(
        "# {} Brain — Workspaces",
        input.config.profile.business_name()
    ));
    doc.blank();
    doc.line(format!("> Brain: {}", brain_label));
    doc.blank();

    doc.heading("Commands");
    doc.lines([
        "- `/brain`: Brain status and configuration",
        "- `/todo`: View and manage tasks",
        "- `/knowledge <topic>`: Load specific brain knowledge",
    ]);
    doc.blank();

    push_listed_projects(&mut doc, "Projects", &brain.projects(), MAX_PROJECTS);
    push_action_items(
        &mut doc,
        "Top Action Items",
        &brain.action_items(MAX_ACTION_ITEMS),
    );

    doc.heading("Brain Access");
    doc.line(format!(
        "Brain data lives at `{}`. Read it on demand instead of loading everything:",
        brain_label
    ));
    doc.line(format!(
        "- Project records: `{}`",
        brain.projects_dir().join("<name>").join("_meta.json").display()
    ));
    doc.line(format!("- Open tasks: `{}`", brain.todos_path().display()));
    doc.line(format!("- Knowledge: `{}`", brain.root().join("Knowledge").display()));
    doc.line("- Use `/knowledge <topic>` to pull one topic into the session");
    doc.blank();

    doc.heading("Auto-Tracking");
    doc.lines([
        "- Work in this workspace is recorded against its brain project",
        "- Repositories not yet in the brain are detected and queued for tracking",
        "- Decisions and action items mentioned while coding are captured to the brain",
    ]);
    doc.blank();

    doc.finish()
}
