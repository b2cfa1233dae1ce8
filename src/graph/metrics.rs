//! Tree metrics: height, chosen parent and subtree width.
//!
//! Nodes may have several parents (temporal predecessors and containers).
//! Height follows the single parent with the greatest height; width counts
//! descendants along every child edge, duplicates included.
//!
//! Both metrics are evaluated over a topological order of the parent -> child
//! graph, parents first for height and children first for width, so no
//! recursion is involved and long chains cannot exhaust the stack.

use std::cmp::Reverse;

use petgraph::Directed;
use petgraph::algo::toposort;
use petgraph::stable_graph::{NodeIndex, StableGraph};

use super::engine::EpicGraph;
use super::node::GraphId;
use crate::error::GraphError;

impl EpicGraph {
    /// Parent -> child graph over next + includes, with node `i` at index `i`.
    ///
    /// Edges are taken from both directions of each relation so a map edited
    /// out of mirror still orders correctly.
    fn hierarchy(&self) -> StableGraph<GraphId, (), Directed> {
        let n = self.len();
        let mut graph = StableGraph::with_capacity(n, n);
        for index in 0..n {
            graph.add_node(GraphId::from(index));
        }
        for index in 0..n {
            let node = NodeIndex::new(index);
            for child in self.next[index].iter().chain(&self.includes[index]) {
                graph.add_edge(node, NodeIndex::new(child.index()), ());
            }
            for parent in self.previous[index].iter().chain(&self.included_by[index]) {
                graph.add_edge(NodeIndex::new(parent.index()), node, ());
            }
        }
        graph
    }

    /// Compute height, parent and width for every node.
    ///
    /// Fails with [`GraphError::Cycle`] if next/include relations loop.
    pub(super) fn compute_metrics(&mut self) -> Result<(), GraphError> {
        let hierarchy = self.hierarchy();
        let order = toposort(&hierarchy, None).map_err(|cycle| GraphError::Cycle {
            uid: self.epics[cycle.node_id().index()].uid,
        })?;

        for node in &order {
            let index = node.index();
            let best = self.previous[index]
                .iter()
                .chain(&self.included_by[index])
                .copied()
                .min_by_key(|p| Reverse(self.node_heights[p.index()]));

            match best {
                Some(parent) => {
                    self.node_parents[index] = parent;
                    self.node_heights[index] = self.node_heights[parent.index()] + 1;
                }
                None => {
                    self.node_parents[index] = GraphId::from(index);
                    self.node_heights[index] = 0;
                }
            }
        }

        for node in order.iter().rev() {
            let index = node.index();
            let children = self.next[index].iter().chain(&self.includes[index]);
            let mut width: Option<u32> = None;
            for child in children {
                let w = self.tree_widths[child.index()];
                width = Some(width.map_or(w, |acc| acc.saturating_add(w)));
            }
            self.tree_widths[index] = width.unwrap_or(1);
        }

        Ok(())
    }
}
