//! Integration tests for the continuous learning block (brain zone only).

mod common;

use common::TestBrain;

fn learning_section(out: &str) -> &str {
    let start = out
        .find("## Continuous Learning")
        .expect("no continuous learning block");
    &out[start..]
}

#[test]
fn test_action_item_bullet_follows_behavior() {
    let brain = TestBrain::configured(r#"{"auto_behaviors": {"action_item_extraction": "off"}}"#);
    let out = brain.generate(&["compact", "brain"]);
    let block = learning_section(&out);

    assert!(!block.contains("- **Action Items**"));
    assert!(block.contains("- **Project Status**"));
    assert!(block.contains("- **New Repos**"));
    assert!(block.contains("- **Decisions**"));
    assert!(block.contains("- **Session Summary**"));
    assert!(block.contains("- **Relationships**"));
}

#[test]
fn test_decision_bullet_follows_behavior() {
    let brain = TestBrain::configured(r#"{"auto_behaviors": {"decision_logging": "off"}}"#);
    let out = brain.generate(&[]);
    let block = learning_section(&out);
    assert!(block.contains("- **Action Items**"));
    assert!(!block.contains("- **Decisions**"));
}

#[test]
fn test_learning_block_only_in_brain_zone() {
    let brain = TestBrain::configured("{}");
    for zone in ["workspaces", "launchpad", "external"] {
        let out = brain.generate(&["full", zone]);
        assert!(!out.contains("## Continuous Learning"), "zone {zone}");
        assert!(!out.contains("- **New Repos**"), "zone {zone}");
    }
}

#[test]
fn test_recent_activity() {
    let brain = TestBrain::configured("{}");
    for i in 0..7 {
        brain.write(
            &format!(".bizbrain/untracked-repos/repo-{i}.json"),
            &format!(r#"{{"name": "repo-{i}", "path": "/code/repo-{i}", "detectedAt": "2026-01-31"}}"#),
        );
    }
    brain.write(
        ".bizbrain/last-session.json",
        r#"{"sessionEnd": "2026-01-31T18:00:00Z", "heartbeats": 23}"#,
    );
    let long_summary: Vec<String> = (1..=20).map(|i| format!("summary line {i}")).collect();
    brain.write(
        "Operations/learning/summaries/2026-01-29-first.md",
        "# First",
    );
    brain.write(
        "Operations/learning/summaries/2026-01-30-second.md",
        "# Second",
    );
    brain.write(
        "Operations/learning/summaries/2026-01-31-third.md",
        &long_summary.join("\n"),
    );
    brain.write(
        "Operations/learning/summaries/2026-01-28-oldest.md",
        "# Oldest",
    );
    brain.write(
        "Knowledge/decisions/pricing.md",
        "# Pricing\n\n## 2026-01-05 Hourly\nOld entry\n\n## 2026-01-20 Retainers\nMove clients to retainers\nEffective February\nApproved by Sam\nNot shown",
    );

    let out = brain.generate(&[]);
    let block = learning_section(&out);

    assert!(block.contains("### Untracked Repos"));
    assert!(block.contains("- **repo-0**: `/code/repo-0` (detected 2026-01-31)"));
    assert!(block.contains("- **repo-4**"));
    assert!(!block.contains("repo-5"));

    assert!(block.contains("### Last Session\n- Ended: 2026-01-31T18:00:00Z\n- Tool uses: 23\n"));

    assert!(block.contains("### Recent Session Summaries\nsummary line 1\n"));
    assert!(block.contains("summary line 8\n\n# Second\n\n# First\n"));
    assert!(!block.contains("summary line 9"));
    assert!(!block.contains("# Oldest"));

    assert!(block.contains(
        "### Recent Decisions\n**pricing**\n2026-01-20 Retainers\nMove clients to retainers\nEffective February\nApproved by Sam\n"
    ));
    assert!(!block.contains("Not shown"));
    assert!(!block.contains("Old entry"));
}

#[test]
fn test_no_activity_sections_without_data() {
    let brain = TestBrain::configured("{}");
    let out = brain.generate(&[]);
    let block = learning_section(&out);
    assert!(!block.contains("###"));
}
