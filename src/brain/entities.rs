//! Entity index loader.

use super::{Brain, leading_lines, read_text};

impl Brain {
    /// The first `max_lines` lines of `Entities/People/ENTITY-INDEX.md`.
    ///
    /// Empty when the index does not exist.
    pub fn entity_summary(&self, max_lines: usize) -> String {
        read_text(&self.entity_index_path())
            .map(|content| leading_lines(&content, max_lines).join("\n"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::brain::test_support::TempBrain;

    const INDEX: &str = "Entities/People/ENTITY-INDEX.md";

    #[test]
    fn test_entity_summary_truncates() {
        let tb = TempBrain::new();
        let content: Vec<String> = (1..=100).map(|i| format!("- Person {i}")).collect();
        tb.write(INDEX, &content.join("\n"));

        let summary = tb.brain.entity_summary(60);
        assert_eq!(summary.lines().count(), 60);
        assert!(summary.starts_with("- Person 1\n"));
        assert!(summary.ends_with("- Person 60"));

        assert_eq!(tb.brain.entity_summary(40).lines().count(), 40);
    }

    #[test]
    fn test_entity_summary_missing_is_empty() {
        let tb = TempBrain::new();
        assert_eq!(tb.brain.entity_summary(60), "");
    }

    #[test]
    fn test_entity_summary_short_file_kept_whole() {
        let tb = TempBrain::new();
        tb.write(INDEX, "# People\n- Dana\n");
        assert_eq!(tb.brain.entity_summary(60), "# People\n- Dana\n");
    }
}
