//! External zone: the session is somewhere outside the brain's folders.
//! Reads nothing beyond the parsed config.

use super::{Document, RenderInput};

/// Sibling folders of the brain inside the root container.
const WORKSPACES_DIR: &str = "Workspaces";
const LAUNCHPAD_DIR: &str = "Launchpad";

pub(super) fn render(input: &RenderInput<'_>) -> String {
    let mut doc = Document::new();

    doc.line(format!(
        "# {} Brain — BizBrain OS",
        input.config.profile.business_name()
    ));
    doc.blank();
    doc.line(format!("> Brain: {}", input.brain_label()));
    if input.mode.is_full() {
        doc.line(format!(
            "> Workspaces: {}",
            input.root_path.join(WORKSPACES_DIR).display()
        ));
        doc.line(format!(
            "> Launchpad: {}",
            input.root_path.join(LAUNCHPAD_DIR).display()
        ));
    }
    doc.blank();

    doc.heading("Commands");
    doc.lines([
        "- `/brain`: Brain status and configuration",
        "- `/knowledge <topic>`: Load specific brain knowledge",
        "- `/todo`: View and manage tasks",
    ]);
    doc.blank();

    doc.heading("Auto-Tracking");
    doc.lines([
        "- This session is outside the brain; brain files are read from the path above",
        "- Action items, decisions, and entity updates are still recorded to the brain",
        "- New repositories you work in are detected and queued for tracking",
    ]);
    doc.blank();

    doc.finish()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::brain::test_support::TempBrain;
    use crate::config::{BrainConfig, Mode, Zone};
    use crate::render::{RenderInput, render};

    fn render_external(tb: &TempBrain, mode: Mode, root: &Path) -> String {
        let config = BrainConfig::parse(r#"{"profile": {"businessName": "Acme"}}"#).unwrap();
        render(&RenderInput {
            config: &config,
            brain: &tb.brain,
            mode,
            zone: Zone::External,
            root_path: root,
        })
    }

    #[test]
    fn test_sibling_paths_only_in_full_mode() {
        let tb = TempBrain::new();
        let root = Path::new("/home/sam/bizbrain");

        let out = render_external(&tb, Mode::Compact, root);
        assert!(out.starts_with("# Acme Brain — BizBrain OS\n"));
        assert!(!out.contains("> Workspaces:"));

        let out = render_external(&tb, Mode::Full, root);
        assert!(out.contains("> Workspaces: /home/sam/bizbrain/Workspaces\n"));
        assert!(out.contains("> Launchpad: /home/sam/bizbrain/Launchpad\n"));
    }

    #[test]
    fn test_external_ignores_brain_data() {
        let tb = TempBrain::new();
        tb.mkdir("Projects/hidden-project");
        tb.write(
            "Operations/todos/aggregated-todos.json",
            r#"{"items": [{"id": "T-1", "text": "x"}]}"#,
        );
        let out = render_external(&tb, Mode::Full, tb.path());
        assert!(!out.contains("hidden-project"));
        assert!(!out.contains("T-1"));
        assert_eq!(out.lines().filter(|l| l.starts_with("- ")).count(), 6);
    }
}
