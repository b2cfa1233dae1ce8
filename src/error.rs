//! Error types for epic graph construction.

use crate::graph::GraphId;

/// Errors raised while building or editing an [`EpicGraph`](crate::graph::EpicGraph).
///
/// Lookup misses are not errors; they come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A description line carries a locator that cannot be read as a relation.
    #[error("epic {uid}: malformed relation directive {line:?}")]
    MalformedDirective { uid: u64, line: String },

    /// A relation points at an epic that is not part of the input.
    /// Only raised when strict target checking is enabled.
    #[error("epic {uid}: relation target {target} is not a known epic")]
    UnresolvedTarget { uid: u64, target: u64 },

    /// Temporal or containment relations form a cycle through this epic.
    #[error("epic {uid} is part of a next/include cycle")]
    Cycle { uid: u64 },

    /// Two input records share a uid.
    #[error("duplicate epic uid {uid}")]
    DuplicateUid { uid: u64 },

    #[error("{id} is out of range for a graph of {len} epics")]
    GraphIdOutOfRange { id: GraphId, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GraphError::MalformedDirective {
            uid: 3,
            line: "next: https://x/abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "epic 3: malformed relation directive \"next: https://x/abc\""
        );

        let err = GraphError::GraphIdOutOfRange { id: GraphId(9), len: 4 };
        assert_eq!(err.to_string(), "Graph(9) is out of range for a graph of 4 epics");
    }
}
