//! Epic records.
//!
//! An epic is a tracked unit of work pulled from the issue tracker. The core
//! never mutates an epic; it only moves it between graph slots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Open/closed state of an epic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Opened,
    Closed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Opened => f.write_str("opened"),
            Status::Closed => f.write_str("closed"),
        }
    }
}

/// A single epic as delivered by the fetch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Epic {
    /// Domain identifier, unique across the input.
    pub uid: u64,
    pub title: String,
    pub status: Status,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Free text; relation directives live here, one per line.
    #[serde(default)]
    pub description: String,
    /// Number of closed issues attached to the epic.
    #[serde(default)]
    pub count_closed: u32,
    /// Number of issues attached to the epic.
    #[serde(default)]
    pub count_all_issues: u32,
    #[serde(default)]
    pub issue_uids: Option<Vec<u64>>,
}

impl Epic {
    /// Create an epic with no labels, description or issues.
    pub fn new(uid: u64, title: impl Into<String>, status: Status) -> Self {
        Self {
            uid,
            title: title.into(),
            status,
            labels: Vec::new(),
            description: String::new(),
            count_closed: 0,
            count_all_issues: 0,
            issue_uids: None,
        }
    }

    /// Builder-style setter for the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder-style setter for the labels.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for the issue counts.
    pub fn with_counts(mut self, count_closed: u32, count_all_issues: u32) -> Self {
        self.count_closed = count_closed;
        self.count_all_issues = count_all_issues;
        self
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.status == Status::Closed
    }

    /// Fraction of closed issues, or None for an epic without issues.
    pub fn progress(&self) -> Option<f32> {
        if self.count_all_issues == 0 {
            return None;
        }
        Some(self.count_closed as f32 / self.count_all_issues as f32)
    }
}

impl fmt::Display for Epic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.uid, self.title, self.status)
    }
}
