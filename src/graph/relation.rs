//! Relation kinds.
//!
//! A [`Relation`] is what a description line asks for; an [`AdjacencyKind`]
//! names one of the five adjacency maps the graph keeps. One relation writes
//! into two maps (its forward and mirrored direction).

use std::fmt;

/// A relation directive found in an epic description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The target comes before this epic.
    Previous,
    /// The target comes after this epic.
    Next,
    /// This epic contains the target.
    Include,
    /// Symmetric association.
    Related,
}

impl Relation {
    /// Keyword checks run in this order; the first match governs the line.
    pub const ALL: [Relation; 4] = [
        Relation::Previous,
        Relation::Next,
        Relation::Include,
        Relation::Related,
    ];

    /// The keyword that marks a line as carrying this relation.
    pub fn keyword(self) -> &'static str {
        match self {
            Relation::Previous => "previous",
            Relation::Next => "next",
            Relation::Include => "include",
            Relation::Related => "related",
        }
    }

    /// Find the relation governing a line. Matching is by substring, so
    /// `includes` and `included` count as `include`.
    pub fn detect(line: &str) -> Option<Relation> {
        Self::ALL.into_iter().find(|r| line.contains(r.keyword()))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One of the five adjacency maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AdjacencyKind {
    Next = 0,
    Previous = 1,
    Related = 2,
    Includes = 3,
    IncludedBy = 4,
}

impl AdjacencyKind {
    pub const ALL: [AdjacencyKind; 5] = [
        AdjacencyKind::Next,
        AdjacencyKind::Previous,
        AdjacencyKind::Related,
        AdjacencyKind::Includes,
        AdjacencyKind::IncludedBy,
    ];
}

impl TryFrom<u8> for AdjacencyKind {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Next),
            1 => Ok(Self::Previous),
            2 => Ok(Self::Related),
            3 => Ok(Self::Includes),
            4 => Ok(Self::IncludedBy),
            other => Err(other),
        }
    }
}
