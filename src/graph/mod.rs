//! Epic graph data structures and operations.
//!
//! This module provides the epic arena with its five adjacency maps, the
//! extraction of relations from descriptions, tree metrics and read-only
//! queries. Everything is keyed by dense [`GraphId`]s.

mod engine;
mod epic;
mod extract;
mod metrics;
mod node;
mod query;
mod relation;

pub use engine::EpicGraph;
pub use epic::{Epic, Status};
pub use extract::{Directive, parse_description};
pub use node::GraphId;
pub use relation::{AdjacencyKind, Relation};
