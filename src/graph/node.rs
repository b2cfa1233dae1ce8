//! Graph id type.
//!
//! Every epic occupies one slot in the graph arena. The slot index is its
//! graph id: a dense integer in `[0, n)` that is independent of the epic's
//! domain uid and may be permuted by the layout reordering step.

use std::fmt;

/// Dense positional identifier of an epic inside an [`EpicGraph`](super::EpicGraph).
///
/// Wraps a u32 for compact adjacency lists and WebAssembly interop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphId(pub u32);

impl GraphId {
    /// Create a new GraphId from a raw u32.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// The slot index this id refers to.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Map this id through the transposition `a <-> b`.
    #[inline]
    pub fn transposed(self, a: GraphId, b: GraphId) -> Self {
        if self == a {
            b
        } else if self == b {
            a
        } else {
            self
        }
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph({})", self.0)
    }
}

impl From<u32> for GraphId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<GraphId> for u32 {
    #[inline]
    fn from(id: GraphId) -> Self {
        id.0
    }
}

impl From<usize> for GraphId {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_id() {
        let id = GraphId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.index(), 42);
        assert_eq!(format!("{}", id), "Graph(42)");
    }

    #[test]
    fn test_graph_id_conversion() {
        let id: GraphId = 123u32.into();
        let raw: u32 = id.into();
        assert_eq!(raw, 123);
        assert_eq!(GraphId::from(7usize), GraphId(7));
    }

    #[test]
    fn test_transposed() {
        let (a, b) = (GraphId(1), GraphId(4));
        assert_eq!(GraphId(1).transposed(a, b), GraphId(4));
        assert_eq!(GraphId(4).transposed(a, b), GraphId(1));
        assert_eq!(GraphId(2).transposed(a, b), GraphId(2));
    }
}
