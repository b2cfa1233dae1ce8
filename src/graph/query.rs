//! Read-only queries used by layout consumers.

use std::collections::HashSet;

use super::engine::EpicGraph;
use super::node::GraphId;
use super::relation::AdjacencyKind;

impl EpicGraph {
    /// Nodes without a temporal predecessor or container, ascending.
    pub fn roots(&self) -> Vec<GraphId> {
        (0..self.len())
            .filter(|&i| self.previous[i].is_empty() && self.included_by[i].is_empty())
            .map(GraphId::from)
            .collect()
    }

    /// Roots that also have no successor, contained epic or related epic.
    ///
    /// Pass precomputed roots to avoid recomputing them.
    pub fn orphans(&self, roots: Option<&[GraphId]>) -> Vec<GraphId> {
        let computed;
        let roots = match roots {
            Some(roots) => roots,
            None => {
                computed = self.roots();
                computed.as_slice()
            }
        };

        roots
            .iter()
            .copied()
            .filter(|r| {
                let i = r.index();
                self.next[i].is_empty() && self.includes[i].is_empty() && self.related[i].is_empty()
            })
            .collect()
    }

    /// Pre-order node list of the subtree under `root`: the root, then the
    /// trees of its `next` entries, then those of its `includes` entries.
    ///
    /// Nodes reachable along several paths appear once per path.
    pub fn tree(&self, root: GraphId) -> Vec<GraphId> {
        let mut nodes = Vec::new();
        if root.index() >= self.len() {
            return nodes;
        }

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            nodes.push(node);
            let i = node.index();
            // Reversed so the first child is visited first.
            stack.extend(self.next[i].iter().chain(&self.includes[i]).rev().copied());
        }
        nodes
    }

    /// Pairs of tree roots whose trees touch through any relation.
    ///
    /// For every tree `i` and later tree `j`, `(root_i, root_j)` is reported
    /// once if some member of tree `i` has a neighbor, in any of the five
    /// adjacency maps, inside tree `j`. Pairs come out in `(i, j)` order.
    pub fn related_tree_roots(&self, trees: &[Vec<GraphId>]) -> Vec<(GraphId, GraphId)> {
        let members: Vec<HashSet<GraphId>> = trees
            .iter()
            .map(|tree| tree.iter().copied().collect())
            .collect();

        let mut pairs = Vec::new();
        for i in 0..trees.len().saturating_sub(1) {
            let Some(&root_i) = trees[i].first() else {
                continue;
            };

            let neighbors: HashSet<GraphId> = trees[i]
                .iter()
                .flat_map(|node| {
                    AdjacencyKind::ALL
                        .into_iter()
                        .flat_map(move |kind| self.neighbors(kind, *node).iter().copied())
                })
                .collect();

            for j in (i + 1)..trees.len() {
                let Some(&root_j) = trees[j].first() else {
                    continue;
                };
                if neighbors.iter().any(|n| members[j].contains(n)) {
                    pairs.push((root_i, root_j));
                }
            }
        }
        pairs
    }

    /// Edges of one adjacency map as flat `[src0, tgt0, src1, tgt1, ...]`
    /// pairs, the format tree layout engines take.
    pub fn edge_pairs(&self, kind: AdjacencyKind) -> Vec<u32> {
        let mut edges = Vec::new();
        for (src, targets) in self.adjacency(kind).iter().enumerate() {
            for target in targets {
                edges.push(src as u32);
                edges.push(target.raw());
            }
        }
        edges
    }

    /// The chosen single-parent forest as flat `[parent, child, ...]` pairs.
    /// Roots contribute no edge.
    pub fn parent_edges(&self) -> Vec<u32> {
        let mut edges = Vec::new();
        for (child, parent) in self.node_parents.iter().enumerate() {
            if parent.index() != child {
                edges.push(parent.raw());
                edges.push(child as u32);
            }
        }
        edges
    }
}
