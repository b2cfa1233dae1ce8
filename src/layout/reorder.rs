//! Related-tree reordering.
//!
//! Consumers lay epics out in graph id order, one root tree after another.
//! When two root trees are connected by some relation, this pass moves the
//! second tree's root right behind the first tree's root by swapping graph
//! ids, so the connection is drawn across a short distance.
//!
//! Pairs are processed in discovery order from an owned worklist. After each
//! swap every pending pair is mapped through the same transposition, so it
//! keeps pointing at the epics it was recorded for.

use std::collections::VecDeque;

use tracing::debug;

use crate::graph::{EpicGraph, GraphId};

/// Reorder graph ids so related root trees sit next to each other.
///
/// Returns the swaps that changed the graph, in application order.
pub fn reorder_related_trees(graph: &mut EpicGraph) -> Vec<(GraphId, GraphId)> {
    let trees: Vec<Vec<GraphId>> = graph
        .roots()
        .into_iter()
        .map(|root| graph.tree(root))
        .collect();
    let pending = graph.related_tree_roots(&trees).into();
    apply_swaps(graph, pending)
}

fn apply_swaps(
    graph: &mut EpicGraph,
    mut pending: VecDeque<(GraphId, GraphId)>,
) -> Vec<(GraphId, GraphId)> {
    let mut applied = Vec::new();

    while let Some((a, b)) = pending.pop_front() {
        let slot = GraphId(a.raw() + 1);
        if slot == b {
            continue;
        }
        if let Err(err) = graph.swap_graph_ids(slot, b) {
            debug!(%a, %b, %err, "skipping related tree swap");
            continue;
        }

        for pair in pending.iter_mut() {
            *pair = (pair.0.transposed(slot, b), pair.1.transposed(slot, b));
        }
        applied.push((slot, b));
    }

    applied
}
