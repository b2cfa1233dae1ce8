//! Relationship extraction from epic descriptions.
//!
//! Descriptions carry directives such as `next: https://tracker/epics/12+`.
//! A line is only looked at if it contains one of the relation keywords;
//! every locator token on such a line yields one directive whose target uid
//! is the last path segment of the locator.

use tracing::{debug, trace};

use super::engine::EpicGraph;
use super::node::GraphId;
use super::relation::{AdjacencyKind, Relation};
use crate::config::GraphConfig;
use crate::error::GraphError;

/// A parsed relation directive, target not yet resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub relation: Relation,
    /// Domain uid of the target epic.
    pub target: u64,
}

/// Parse every directive in a description.
///
/// `uid` is the owning epic and only used for error reporting.
pub fn parse_description(
    uid: u64,
    description: &str,
    config: &GraphConfig,
) -> Result<Vec<Directive>, GraphError> {
    let mut directives = Vec::new();

    for line in description.lines() {
        let Some(relation) = Relation::detect(line) else {
            continue;
        };

        for token in line.split_whitespace().filter(|t| config.is_locator(t)) {
            let target = parse_target(token).ok_or_else(|| GraphError::MalformedDirective {
                uid,
                line: line.to_string(),
            })?;
            directives.push(Directive { relation, target });
        }
    }

    Ok(directives)
}

/// Read the target uid from a locator: last path segment, one trailing `+`
/// removed.
fn parse_target(token: &str) -> Option<u64> {
    let segment = token.rsplit('/').next()?;
    let segment = segment.strip_suffix('+').unwrap_or(segment);
    segment.parse().ok()
}

fn push_unique(list: &mut Vec<GraphId>, id: GraphId) {
    if !list.contains(&id) {
        list.push(id);
    }
}

impl EpicGraph {
    /// Populate the adjacency maps from every epic's description.
    pub(super) fn extract_relations(&mut self, config: &GraphConfig) -> Result<(), GraphError> {
        for index in 0..self.len() {
            let source = GraphId::from(index);
            let uid = self.epics[index].uid;
            let directives = parse_description(uid, &self.epics[index].description, config)?;

            for directive in directives {
                let Some(target) = self.find_graph_id_by_uid(directive.target) else {
                    if config.strict_targets {
                        return Err(GraphError::UnresolvedTarget {
                            uid,
                            target: directive.target,
                        });
                    }
                    debug!(
                        uid,
                        target = directive.target,
                        relation = %directive.relation,
                        "dropping relation to unknown epic"
                    );
                    continue;
                };
                self.add_relation(source, target, directive.relation);
            }
        }

        for kind in AdjacencyKind::ALL {
            for (index, list) in self.adjacency(kind).iter().enumerate() {
                if !list.is_empty() {
                    trace!(?kind, graph_id = index, targets = ?list, "adjacency");
                }
            }
        }
        Ok(())
    }

    /// Insert one directive's edges.
    ///
    /// `next`/`previous` are deduplicated in both directions, `includes` and
    /// `included_by` never are, and `related` only in the mirrored direction.
    fn add_relation(&mut self, source: GraphId, target: GraphId, relation: Relation) {
        let (s, t) = (source.index(), target.index());
        match relation {
            Relation::Previous => {
                push_unique(&mut self.previous[s], target);
                push_unique(&mut self.next[t], source);
            }
            Relation::Next => {
                push_unique(&mut self.next[s], target);
                push_unique(&mut self.previous[t], source);
            }
            Relation::Include => {
                self.includes[s].push(target);
                self.included_by[t].push(source);
            }
            Relation::Related => {
                self.related[s].push(target);
                push_unique(&mut self.related[t], source);
            }
        }
    }
}
