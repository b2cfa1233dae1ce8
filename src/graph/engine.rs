//! EpicGraph - Core graph data structure.
//!
//! The EpicGraph stores epics in a contiguous arena indexed by [`GraphId`]
//! and keeps every relation and metric as a per-slot array keyed by that
//! same id. Identities are permuted by swapping slots and rewriting the ids
//! stored in the arrays, never through references between epics.

use std::collections::{BTreeMap, HashSet};

use tracing::info;

use super::epic::Epic;
use super::node::GraphId;
use super::relation::AdjacencyKind;
use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::layout::reorder_related_trees;

/// The epic relationship graph.
///
/// This struct manages:
/// - The epic arena (graph id -> epic)
/// - Five adjacency maps (next, previous, related, includes, included by)
/// - Per-node metrics (height, chosen parent, subtree width)
#[derive(Debug, Clone)]
pub struct EpicGraph {
    /// Epic at each graph id.
    pub(super) epics: Vec<Epic>,

    /// Temporal successors.
    pub(super) next: Vec<Vec<GraphId>>,

    /// Temporal predecessors, mirror of `next`.
    pub(super) previous: Vec<Vec<GraphId>>,

    /// Symmetric association.
    pub(super) related: Vec<Vec<GraphId>>,

    /// Contained epics.
    pub(super) includes: Vec<Vec<GraphId>>,

    /// Containing epics, mirror of `includes`.
    pub(super) included_by: Vec<Vec<GraphId>>,

    /// Distance from the root along the chosen parent chain.
    pub(super) node_heights: Vec<u32>,

    /// Chosen single parent; roots are their own parent.
    pub(super) node_parents: Vec<GraphId>,

    /// Size of the descendant subtree under next + includes.
    pub(super) tree_widths: Vec<u32>,
}

impl EpicGraph {
    /// Build a graph with the default configuration.
    ///
    /// Epics receive graph ids in iteration order.
    pub fn new(epics: impl IntoIterator<Item = Epic>) -> Result<Self, GraphError> {
        Self::build(epics, &GraphConfig::default())
    }

    /// Build a graph from a uid-keyed map, in ascending uid order.
    pub fn from_map(epics: BTreeMap<u64, Epic>) -> Result<Self, GraphError> {
        Self::new(epics.into_values())
    }

    /// Run the full pipeline: index, extract relations, compute metrics and
    /// optionally reorder related trees.
    pub fn build(
        epics: impl IntoIterator<Item = Epic>,
        config: &GraphConfig,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::index(epics)?;
        graph.extract_relations(config)?;
        graph.compute_metrics()?;

        let swaps = if config.reorder_related_trees {
            reorder_related_trees(&mut graph)
        } else {
            Vec::new()
        };

        info!(
            epics = graph.len(),
            roots = graph.roots().len(),
            swaps = swaps.len(),
            "epic graph built"
        );
        Ok(graph)
    }

    /// Assign graph ids and allocate empty adjacency and metric maps.
    pub(super) fn index(epics: impl IntoIterator<Item = Epic>) -> Result<Self, GraphError> {
        let epics: Vec<Epic> = epics.into_iter().collect();

        let mut seen = HashSet::with_capacity(epics.len());
        for epic in &epics {
            if !seen.insert(epic.uid) {
                return Err(GraphError::DuplicateUid { uid: epic.uid });
            }
        }

        let n = epics.len();
        Ok(Self {
            epics,
            next: vec![Vec::new(); n],
            previous: vec![Vec::new(); n],
            related: vec![Vec::new(); n],
            includes: vec![Vec::new(); n],
            included_by: vec![Vec::new(); n],
            node_heights: vec![0; n],
            node_parents: (0..n).map(GraphId::from).collect(),
            tree_widths: vec![1; n],
        })
    }

    // =========================================================================
    // Epic Access
    // =========================================================================

    /// Number of epics.
    #[inline]
    pub fn len(&self) -> usize {
        self.epics.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.epics.is_empty()
    }

    /// All epics in graph id order.
    pub fn epics(&self) -> &[Epic] {
        &self.epics
    }

    /// The epic at a graph id.
    pub fn epic(&self, id: GraphId) -> Option<&Epic> {
        self.epics.get(id.index())
    }

    /// Find an epic by its domain uid.
    pub fn find_epic_by_uid(&self, uid: u64) -> Option<&Epic> {
        self.epics.iter().find(|e| e.uid == uid)
    }

    /// Find the graph id currently holding the epic with this uid.
    pub fn find_graph_id_by_uid(&self, uid: u64) -> Option<GraphId> {
        self.epics
            .iter()
            .position(|e| e.uid == uid)
            .map(GraphId::from)
    }

    // =========================================================================
    // Adjacency and Metrics
    // =========================================================================

    /// One adjacency map, indexed by graph id.
    pub fn adjacency(&self, kind: AdjacencyKind) -> &[Vec<GraphId>] {
        match kind {
            AdjacencyKind::Next => &self.next,
            AdjacencyKind::Previous => &self.previous,
            AdjacencyKind::Related => &self.related,
            AdjacencyKind::Includes => &self.includes,
            AdjacencyKind::IncludedBy => &self.included_by,
        }
    }

    fn adjacency_mut(&mut self, kind: AdjacencyKind) -> &mut Vec<Vec<GraphId>> {
        match kind {
            AdjacencyKind::Next => &mut self.next,
            AdjacencyKind::Previous => &mut self.previous,
            AdjacencyKind::Related => &mut self.related,
            AdjacencyKind::Includes => &mut self.includes,
            AdjacencyKind::IncludedBy => &mut self.included_by,
        }
    }

    /// Neighbors of a node in one adjacency map. Empty for unknown ids.
    pub fn neighbors(&self, kind: AdjacencyKind, id: GraphId) -> &[GraphId] {
        self.adjacency(kind)
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn node_heights(&self) -> &[u32] {
        &self.node_heights
    }

    pub fn node_parents(&self) -> &[GraphId] {
        &self.node_parents
    }

    pub fn tree_widths(&self) -> &[u32] {
        &self.tree_widths
    }

    // =========================================================================
    // Identity Permutation
    // =========================================================================

    /// Exchange the epics at `a` and `b` and rewrite every stored reference
    /// so each map keeps describing the same epics.
    ///
    /// Adjacency lists are swapped between the two slots; then any list that
    /// mentions only one of the two ids has that id replaced in place. Lists
    /// mentioning both are left alone. Heights and widths move with their
    /// slot; parents are ids and get the same replacement.
    pub fn swap_graph_ids(&mut self, a: GraphId, b: GraphId) -> Result<(), GraphError> {
        let len = self.len();
        for id in [a, b] {
            if id.index() >= len {
                return Err(GraphError::GraphIdOutOfRange { id, len });
            }
        }
        if a == b {
            return Ok(());
        }
        let (i, j) = (a.index(), b.index());

        self.epics.swap(i, j);

        for kind in AdjacencyKind::ALL {
            let map = self.adjacency_mut(kind);
            map.swap(i, j);
            for list in map.iter_mut() {
                let has_a = list.contains(&a);
                let has_b = list.contains(&b);
                if has_a == has_b {
                    continue;
                }
                for id in list.iter_mut() {
                    *id = id.transposed(a, b);
                }
            }
        }

        self.node_heights.swap(i, j);
        self.tree_widths.swap(i, j);
        self.node_parents.swap(i, j);
        for parent in self.node_parents.iter_mut() {
            *parent = parent.transposed(a, b);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Status;

    fn epic(uid: u64, description: &str) -> Epic {
        Epic::new(uid, format!("Epic {uid}"), Status::Opened).with_description(description)
    }

    fn ids(raw: &[u32]) -> Vec<GraphId> {
        raw.iter().copied().map(GraphId).collect()
    }

    fn unordered(epics: impl IntoIterator<Item = Epic>) -> EpicGraph {
        EpicGraph::build(
            epics,
            &GraphConfig {
                reorder_related_trees: false,
                ..GraphConfig::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_empty_graph() {
        let graph = EpicGraph::new(Vec::new()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(graph.roots().is_empty());
    }

    #[test]
    fn test_ids_follow_input_order() {
        let graph = EpicGraph::new([epic(30, ""), epic(10, ""), epic(20, "")]).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.epic(GraphId(0)).map(|e| e.uid), Some(30));
        assert_eq!(graph.epic(GraphId(2)).map(|e| e.uid), Some(20));
        assert!(graph.epic(GraphId(3)).is_none());
    }

    #[test]
    fn test_from_map_uses_uid_order() {
        let map: BTreeMap<u64, Epic> = [(30, epic(30, "")), (10, epic(10, ""))].into();
        let graph = EpicGraph::from_map(map).unwrap();
        assert_eq!(graph.find_graph_id_by_uid(10), Some(GraphId(0)));
        assert_eq!(graph.find_graph_id_by_uid(30), Some(GraphId(1)));
    }

    #[test]
    fn test_lookups() {
        let graph = EpicGraph::new([epic(5, ""), epic(6, "")]).unwrap();
        assert_eq!(graph.find_epic_by_uid(6).map(|e| e.uid), Some(6));
        assert_eq!(graph.find_graph_id_by_uid(5), Some(GraphId(0)));
        assert!(graph.find_epic_by_uid(7).is_none());
        assert!(graph.find_graph_id_by_uid(7).is_none());
    }

    #[test]
    fn test_duplicate_uid_rejected() {
        let err = EpicGraph::new([epic(1, ""), epic(1, "")]).unwrap_err();
        assert_eq!(err, GraphError::DuplicateUid { uid: 1 });
    }

    #[test]
    fn test_malformed_directive_aborts_build() {
        let err = EpicGraph::new([epic(1, "next: https://x/two")]).unwrap_err();
        assert!(matches!(err, GraphError::MalformedDirective { uid: 1, .. }));
    }

    #[test]
    fn test_neighbors_unknown_id_is_empty() {
        let graph = EpicGraph::new([epic(1, "")]).unwrap();
        assert!(graph.neighbors(AdjacencyKind::Next, GraphId(5)).is_empty());
    }

    #[test]
    fn test_swap_rewrites_references() {
        // 1 -> 2 -> 3 chain plus 4 included by 1.
        let mut graph = unordered([
            epic(1, "next: https://x/2\ninclude: https://x/4"),
            epic(2, "next: https://x/3"),
            epic(3, ""),
            epic(4, ""),
        ]);

        graph.swap_graph_ids(GraphId(1), GraphId(3)).unwrap();

        assert_eq!(graph.epic(GraphId(1)).map(|e| e.uid), Some(4));
        assert_eq!(graph.epic(GraphId(3)).map(|e| e.uid), Some(2));
        assert_eq!(graph.neighbors(AdjacencyKind::Next, GraphId(0)), ids(&[3]).as_slice());
        assert_eq!(graph.neighbors(AdjacencyKind::Includes, GraphId(0)), ids(&[1]).as_slice());
        assert_eq!(graph.neighbors(AdjacencyKind::Next, GraphId(3)), ids(&[2]).as_slice());
        assert_eq!(graph.neighbors(AdjacencyKind::Previous, GraphId(2)), ids(&[3]).as_slice());
        assert_eq!(graph.neighbors(AdjacencyKind::IncludedBy, GraphId(1)), ids(&[0]).as_slice());

        // Metrics follow their epics.
        assert_eq!(graph.node_heights(), &[0, 1, 2, 1]);
        assert_eq!(graph.node_parents(), ids(&[0, 0, 3, 0]).as_slice());
        assert_eq!(graph.tree_widths(), &[2, 1, 1, 1]);
    }

    #[test]
    fn test_swap_leaves_lists_with_both_ids() {
        let mut graph = unordered([
            epic(1, "include: https://x/2\ninclude: https://x/3"),
            epic(2, ""),
            epic(3, ""),
        ]);

        graph.swap_graph_ids(GraphId(1), GraphId(2)).unwrap();

        assert_eq!(graph.neighbors(AdjacencyKind::Includes, GraphId(0)), ids(&[1, 2]).as_slice());
        assert_eq!(graph.epic(GraphId(1)).map(|e| e.uid), Some(3));
    }

    #[test]
    fn test_swap_replaces_every_occurrence() {
        let mut graph = unordered([
            epic(1, "include: https://x/2\ninclude: https://x/2"),
            epic(2, ""),
            epic(3, ""),
        ]);

        graph.swap_graph_ids(GraphId(1), GraphId(2)).unwrap();

        assert_eq!(graph.neighbors(AdjacencyKind::Includes, GraphId(0)), ids(&[2, 2]).as_slice());
        assert_eq!(
            graph.neighbors(AdjacencyKind::IncludedBy, GraphId(2)),
            ids(&[0, 0]).as_slice()
        );
    }

    #[test]
    fn test_swap_is_a_bijection() {
        let mut graph = unordered((1..=6).map(|uid| epic(uid, "")));

        for (a, b) in [(0, 5), (2, 3), (5, 1), (4, 4)] {
            graph.swap_graph_ids(GraphId(a), GraphId(b)).unwrap();
        }

        let mut uids: Vec<u64> = graph.epics().iter().map(|e| e.uid).collect();
        uids.sort_unstable();
        assert_eq!(uids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_swap_out_of_range() {
        let mut graph = EpicGraph::new([epic(1, "")]).unwrap();
        assert_eq!(
            graph.swap_graph_ids(GraphId(0), GraphId(1)),
            Err(GraphError::GraphIdOutOfRange { id: GraphId(1), len: 1 })
        );
    }
}
