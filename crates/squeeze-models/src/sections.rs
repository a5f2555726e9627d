//! Page sections projected from a snapshot.
//!
//! The page is laid out as: about (text blocks next to the bio photo),
//! socials, media gallery, tour. This module does the grouping so front
//! ends only render.

use serde::Serialize;

use crate::{embed_url, ContentBlock, ContentType, Snapshot, SocialPlatform, TourDate};

/// Snapshot grouped by page section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSections {
    pub about: Vec<ContentBlock>,
    pub bio_photos: Vec<ContentBlock>,
    pub socials: Vec<SocialLink>,
    pub media: Vec<MediaItem>,
    pub tour: Vec<TourEntry>,
}

/// Social link with its resolved icon family.
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    #[serde(flatten)]
    pub block: ContentBlock,
    pub platform: SocialPlatform,
}

/// Gallery entry; videos carry a player URL.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(flatten)]
    pub block: ContentBlock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourEntry {
    #[serde(flatten)]
    pub date: TourDate,
    pub tickets_available: bool,
}

impl SiteSections {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let about = snapshot
            .content
            .iter()
            .filter(|c| c.content_type() == ContentType::Text)
            .cloned()
            .collect();

        let bio_photos = snapshot
            .content
            .iter()
            .filter(|c| c.is_bio_photo())
            .cloned()
            .collect();

        let socials = snapshot
            .content
            .iter()
            .filter(|c| c.content_type() == ContentType::Social)
            .map(|c| SocialLink {
                platform: SocialPlatform::from_label(c.metadata().unwrap_or("link")),
                block: c.clone(),
            })
            .collect();

        let media = snapshot
            .content
            .iter()
            .filter(|c| {
                matches!(c.content_type(), ContentType::Image | ContentType::Video)
                    && !c.is_bio_photo()
            })
            .map(|c| MediaItem {
                embed_url: (c.content_type() == ContentType::Video)
                    .then(|| embed_url(c.content())),
                block: c.clone(),
            })
            .collect();

        let tour = snapshot
            .tour_dates
            .iter()
            .map(|t| TourEntry {
                tickets_available: t.has_tickets(),
                date: t.clone(),
            })
            .collect();

        Self {
            about,
            bio_photos,
            socials,
            media,
            tour,
        }
    }
}
