//! Built-in site content used when nothing else resolves.

use squeeze_models::{embed_url, BlockBody, ContentBlock, Snapshot, TourDate, BIO_PHOTO_TAG};

const ABOUT_TEXT: &str = "Soul To Squeeze is the ultimate tribute to the Red Hot Chili Peppers. \
We bring the high-voltage energy, the funky bass lines, and the soulful melodies that define \
the Peppers sound.";

const BIO_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1521334885634-9552f9540abb?auto=format&fit=crop&q=80&w=800";

const STAGE_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1501386761578-eac5c94b800a?auto=format&fit=crop&q=80&w=800";

const LIVE_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// The fixed default snapshot: 7 content blocks and 1 tour date.
pub fn default_snapshot() -> Snapshot {
    Snapshot::new(default_content(), default_tour())
}

pub fn default_content() -> Vec<ContentBlock> {
    vec![
        ContentBlock::new(
            "1",
            "The Squeeze",
            BlockBody::Text {
                body: ABOUT_TEXT.to_string(),
                subtitle: None,
            },
        ),
        ContentBlock::new(
            "bio-photo-main",
            "Band Bio Image",
            BlockBody::Image {
                url: BIO_PHOTO_URL.to_string(),
                tag: Some(BIO_PHOTO_TAG.to_string()),
            },
        ),
        ContentBlock::new(
            "m1",
            "Stage View",
            BlockBody::Image {
                url: STAGE_PHOTO_URL.to_string(),
                tag: None,
            },
        ),
        ContentBlock::new(
            "m2",
            "Live Squeeze",
            BlockBody::Video {
                url: embed_url(LIVE_VIDEO_URL),
                tag: None,
            },
        ),
        social("s1", "Instagram", "https://instagram.com/"),
        social("s2", "Facebook", "https://facebook.com/"),
        social("s3", "YouTube", "https://youtube.com/"),
    ]
}

pub fn default_tour() -> Vec<TourDate> {
    vec![TourDate {
        id: "t1".to_string(),
        venue: "The Funk House".to_string(),
        location: "USA".to_string(),
        date: "DEC 22".to_string(),
        tickets_url: None,
    }]
}

fn social(id: &str, platform: &str, url: &str) -> ContentBlock {
    ContentBlock::new(
        id,
        platform,
        BlockBody::Social {
            url: url.to_string(),
            platform: Some(platform.to_string()),
        },
    )
}
