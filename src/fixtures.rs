//! Shared test data: a small release roadmap with every relation kind.

use crate::graph::{Epic, Status};

/// Nine epics, uids 1..=9, in uid order.
///
/// 1 -> 2 -> 3 and 3 names 1 as previous, 4 -> 5 -> 6, 7 includes 1,
/// 8 is related to 7, 9 stands alone.
pub fn roadmap_epics() -> Vec<Epic> {
    vec![
        Epic::new(1, "Feature 1 MVP", Status::Closed)
            .with_labels(["release::11'23"])
            .with_description("next: https:example.com/2")
            .with_counts(2, 2),
        Epic::new(2, "Feature 1 V2", Status::Opened)
            .with_labels(["release::12'23"])
            .with_description("next: https:example.com/3")
            .with_counts(1, 2),
        Epic::new(3, "Feature 1 V3", Status::Opened)
            .with_labels(["release::12'23"])
            .with_description("previous: https:example.com/1")
            .with_counts(7, 15),
        Epic::new(4, "Another feature MVP", Status::Opened)
            .with_labels(["release::12'23"])
            .with_description("next: https:example.com/5")
            .with_counts(3, 5),
        Epic::new(5, "Another feature V2", Status::Opened)
            .with_labels(["release::02'24", "feature"])
            .with_description("next: https:example.com/6")
            .with_counts(0, 9),
        Epic::new(6, "Another feature V3", Status::Opened).with_counts(0, 7),
        Epic::new(7, "Rollout Release 12'23", Status::Closed)
            .with_labels(["release::12'23"])
            .with_description("include: https:example.com/1"),
        Epic::new(8, "New website", Status::Opened)
            .with_labels(["homepage"])
            .with_description("related: https:example.com/7"),
        Epic::new(9, "Migrate to Python 3", Status::Closed)
            .with_labels(["technical debt", "09'23"])
            .with_counts(1, 1),
    ]
}
