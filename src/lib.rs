//! Epic Graph - WASM Module
//!
//! This module turns a set of project epics into a relationship graph and
//! derives the structure a diagram renderer needs. It is compiled to
//! WebAssembly and exposes a JavaScript-friendly API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `graph`: Epic arena, relation extraction, tree metrics and queries
//! - `layout`: Graph id reordering so related trees are laid out together
//! - `config`: Build options
//! - `error`: Error type shared by all fallible operations

use js_sys::Array;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod graph;
pub mod layout;

#[cfg(test)]
mod fixtures;

pub use config::GraphConfig;
pub use error::GraphError;
pub use graph::{AdjacencyKind, Epic, EpicGraph, GraphId, Status};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn raw_ids(ids: impl IntoIterator<Item = GraphId>) -> Vec<u32> {
    ids.into_iter().map(GraphId::raw).collect()
}

/// Largest integer a JS number holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_UID: f64 = 9_007_199_254_740_991.0;

fn uid_from_js(uid: f64) -> Option<u64> {
    ((0.0..=MAX_SAFE_UID).contains(&uid) && uid.fract() == 0.0).then_some(uid as u64)
}

fn adjacency_kind(kind: u8) -> Result<AdjacencyKind, JsError> {
    AdjacencyKind::try_from(kind).map_err(|k| JsError::new(&format!("unknown adjacency kind {k}")))
}

/// Main entry point for the epic graph.
///
/// This struct wraps the internal EpicGraph and provides the public API
/// exposed to JavaScript. The graph is built once in the constructor and is
/// read-only afterwards.
#[wasm_bindgen]
pub struct EpicGraphWasm {
    graph: EpicGraph,
}

#[wasm_bindgen]
impl EpicGraphWasm {
    /// Build a graph from an array of epic objects with the default
    /// configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(epics: JsValue) -> Result<EpicGraphWasm, JsError> {
        Self::with_config(epics, JsValue::UNDEFINED)
    }

    /// Build a graph with an explicit configuration object. Missing fields
    /// take their defaults; `undefined` or `null` means all defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(epics: JsValue, config: JsValue) -> Result<EpicGraphWasm, JsError> {
        let epics: Vec<Epic> = serde_wasm_bindgen::from_value(epics)?;
        let config: GraphConfig = if config.is_undefined() || config.is_null() {
            GraphConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let graph = EpicGraph::build(epics, &config)?;
        Ok(Self { graph })
    }

    // =========================================================================
    // Epics
    // =========================================================================

    /// Number of epics.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.graph.len()
    }

    /// The epic at a graph id, or undefined.
    pub fn epic(&self, graph_id: u32) -> Result<JsValue, JsError> {
        match self.graph.epic(GraphId(graph_id)) {
            Some(epic) => Ok(serde_wasm_bindgen::to_value(epic)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// All epics in graph id order.
    pub fn epics(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.graph.epics())?)
    }

    /// Graph id of the epic with this uid. Uids are JS numbers; anything
    /// that is not a non-negative safe integer matches no epic.
    #[wasm_bindgen(js_name = findGraphIdByUid)]
    pub fn find_graph_id_by_uid(&self, uid: f64) -> Option<u32> {
        let uid = uid_from_js(uid)?;
        self.graph.find_graph_id_by_uid(uid).map(GraphId::raw)
    }

    // =========================================================================
    // Adjacency and Metrics
    // =========================================================================

    /// Neighbors of a node. `kind`: 0 next, 1 previous, 2 related,
    /// 3 includes, 4 included by.
    pub fn neighbors(&self, kind: u8, graph_id: u32) -> Result<Vec<u32>, JsError> {
        let kind = adjacency_kind(kind)?;
        Ok(raw_ids(self.graph.neighbors(kind, GraphId(graph_id)).iter().copied()))
    }

    /// Height of every node, in graph id order.
    #[wasm_bindgen(js_name = nodeHeights)]
    pub fn node_heights(&self) -> Vec<u32> {
        self.graph.node_heights().to_vec()
    }

    /// Chosen parent of every node; roots are their own parent.
    #[wasm_bindgen(js_name = nodeParents)]
    pub fn node_parents(&self) -> Vec<u32> {
        raw_ids(self.graph.node_parents().iter().copied())
    }

    /// Subtree width of every node.
    #[wasm_bindgen(js_name = treeWidths)]
    pub fn tree_widths(&self) -> Vec<u32> {
        self.graph.tree_widths().to_vec()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[wasm_bindgen(js_name = getRoots)]
    pub fn get_roots(&self) -> Vec<u32> {
        raw_ids(self.graph.roots())
    }

    #[wasm_bindgen(js_name = getOrphans)]
    pub fn get_orphans(&self) -> Vec<u32> {
        raw_ids(self.graph.orphans(None))
    }

    /// Pre-order subtree of a root, duplicates included.
    #[wasm_bindgen(js_name = getTree)]
    pub fn get_tree(&self, root: u32) -> Vec<u32> {
        raw_ids(self.graph.tree(GraphId(root)))
    }

    /// Pairs `[rootA, rootB]` of root trees connected by some relation.
    #[wasm_bindgen(js_name = getRelatedTreeRoots)]
    pub fn get_related_tree_roots(&self) -> Array {
        let trees: Vec<Vec<GraphId>> = self
            .graph
            .roots()
            .into_iter()
            .map(|root| self.graph.tree(root))
            .collect();

        self.graph
            .related_tree_roots(&trees)
            .into_iter()
            .map(|(a, b)| Array::of2(&JsValue::from(a.raw()), &JsValue::from(b.raw())))
            .collect()
    }

    /// Edges of one adjacency map as [src0, tgt0, src1, tgt1, ...].
    #[wasm_bindgen(js_name = edgePairs)]
    pub fn edge_pairs(&self, kind: u8) -> Result<Vec<u32>, JsError> {
        Ok(self.graph.edge_pairs(adjacency_kind(kind)?))
    }

    /// Chosen parent -> child edges as [parent0, child0, ...], ready for a
    /// tree layout.
    #[wasm_bindgen(js_name = parentEdges)]
    pub fn parent_edges(&self) -> Vec<u32> {
        self.graph.parent_edges()
    }
}
