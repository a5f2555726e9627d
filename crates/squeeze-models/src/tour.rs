//! Tour date model

use serde::{Deserialize, Serialize};

/// One show on the tour list.
///
/// `date` is display text exactly as the editor typed it ("JAN 24"), not a
/// calendar value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDate {
    pub id: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets_url: Option<String>,
}

impl TourDate {
    /// Entry as created by the editor's "add date" button.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            venue: "VENUE NAME".to_string(),
            location: "CITY, STATE".to_string(),
            date: "MONTH DD".to_string(),
            tickets_url: None,
        }
    }

    /// Whether the tickets button links anywhere.
    pub fn has_tickets(&self) -> bool {
        self.tickets_url
            .as_deref()
            .map_or(false, |url| !url.trim().is_empty())
    }

    /// Apply a partial update, touching only the fields present in `patch`.
    pub fn apply(&mut self, patch: TourDatePatch) {
        if let Some(venue) = patch.venue {
            self.venue = venue;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(tickets_url) = patch.tickets_url {
            self.tickets_url = Some(tickets_url);
        }
    }
}

/// Partial update for a tour date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets_url: Option<String>,
}
