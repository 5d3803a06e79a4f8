//! Aggregated action item loader.

use serde::Deserialize;
use serde_json::Value;

use super::{Brain, read_json};
use crate::models::ActionItem;

#[derive(Debug, Default, Deserialize)]
struct AggregatedTodos {
    #[serde(default)]
    items: Vec<Value>,
}

impl Brain {
    /// Up to `max` incomplete items in source order.
    ///
    /// Entries that are not JSON objects are skipped.
    pub fn action_items(&self, max: usize) -> Vec<ActionItem> {
        let Some(todos) = read_json::<AggregatedTodos>(&self.todos_path()) else {
            return Vec::new();
        };

        todos
            .items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<ActionItem>(item).ok())
            .filter(|item| !item.completed)
            .take(max)
            .collect()
    }
}
