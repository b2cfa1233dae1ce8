//! Layout ordering for graph visualization.
//!
//! Consumers place epics in graph id order. This module adjusts that order
//! so related trees end up close together; computing coordinates is left to
//! the renderer.

pub mod reorder;

pub use reorder::reorder_related_trees;
