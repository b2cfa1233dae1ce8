//! Build configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`EpicGraph::build`](crate::graph::EpicGraph::build).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphConfig {
    /// Substrings that mark a whitespace-separated token as a locator.
    pub locator_markers: Vec<String>,
    /// Run the related-tree reordering heuristic after metrics.
    pub reorder_related_trees: bool,
    /// Fail on relation targets that are not in the input instead of
    /// dropping them.
    pub strict_targets: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            locator_markers: vec!["https:".to_string()],
            reorder_related_trees: true,
            strict_targets: false,
        }
    }
}

impl GraphConfig {
    /// Whether a token looks like a locator.
    pub fn is_locator(&self, token: &str) -> bool {
        self.locator_markers.iter().any(|m| token.contains(m.as_str()))
    }
}
