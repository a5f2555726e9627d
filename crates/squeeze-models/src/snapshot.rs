//! Snapshot: the full displayable state of the site.

use serde::{Deserialize, Serialize};

use crate::{ContentBlock, TourDate};

/// Content blocks plus tour dates, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub content: Vec<ContentBlock>,
    pub tour_dates: Vec<TourDate>,
}

impl Snapshot {
    pub fn new(content: Vec<ContentBlock>, tour_dates: Vec<TourDate>) -> Self {
        Self {
            content,
            tour_dates,
        }
    }

    pub fn content_block(&self, id: &str) -> Option<&ContentBlock> {
        self.content.iter().find(|c| c.id == id)
    }

    pub fn tour_date(&self, id: &str) -> Option<&TourDate> {
        self.tour_dates.iter().find(|t| t.id == id)
    }

    /// A snapshot is only usable as a startup source when it has content.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}
