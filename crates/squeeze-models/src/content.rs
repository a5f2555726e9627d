//! Content block model.
//!
//! A content block is one editable piece of the page: a bio paragraph, an
//! image, an embedded video, an audio clip or a social link. The payload is
//! a tagged enum so each kind only carries the fields it uses, while the
//! JSON form stays the flat `{id, type, title, content, metadata}` object
//! that drafts and shareable tokens have always used.

use serde::{Deserialize, Serialize};

/// Metadata tag marking the image shown next to the bio.
pub const BIO_PHOTO_TAG: &str = "bio-photo";

/// Title given to freshly added blocks.
pub const NEW_BLOCK_TITLE: &str = "NEW BLOCK";

/// Platform assigned to freshly added social links.
pub const DEFAULT_SOCIAL_PLATFORM: &str = "Instagram";

/// Kind of content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Video,
    Audio,
    Social,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
            ContentType::Social => "social",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ContentType::Text),
            "image" => Some(ContentType::Image),
            "video" => Some(ContentType::Video),
            "audio" => Some(ContentType::Audio),
            "social" => Some(ContentType::Social),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload of a content block, one case per [`ContentType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    /// Free text with an optional subtitle
    Text {
        body: String,
        subtitle: Option<String>,
    },
    /// Image URL with an optional tag (e.g. [`BIO_PHOTO_TAG`])
    Image { url: String, tag: Option<String> },
    /// Video URL, usually an embeddable player URL
    Video { url: String, tag: Option<String> },
    Audio { url: String, tag: Option<String> },
    /// Destination URL and platform name
    Social {
        url: String,
        platform: Option<String>,
    },
}

impl BlockBody {
    /// Build a payload from the flat `content` / `metadata` pair.
    pub fn from_parts(kind: ContentType, content: String, metadata: Option<String>) -> Self {
        match kind {
            ContentType::Text => BlockBody::Text {
                body: content,
                subtitle: metadata,
            },
            ContentType::Image => BlockBody::Image {
                url: content,
                tag: metadata,
            },
            ContentType::Video => BlockBody::Video {
                url: content,
                tag: metadata,
            },
            ContentType::Audio => BlockBody::Audio {
                url: content,
                tag: metadata,
            },
            ContentType::Social => BlockBody::Social {
                url: content,
                platform: metadata,
            },
        }
    }

    /// Placeholder payload for a block added from the editor.
    pub fn placeholder(kind: ContentType) -> Self {
        match kind {
            ContentType::Text => {
                Self::from_parts(kind, "Write here...".to_string(), Some(String::new()))
            }
            ContentType::Social => Self::from_parts(
                kind,
                "https://".to_string(),
                Some(DEFAULT_SOCIAL_PLATFORM.to_string()),
            ),
            _ => Self::from_parts(kind, "https://".to_string(), Some(String::new())),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            BlockBody::Text { .. } => ContentType::Text,
            BlockBody::Image { .. } => ContentType::Image,
            BlockBody::Video { .. } => ContentType::Video,
            BlockBody::Audio { .. } => ContentType::Audio,
            BlockBody::Social { .. } => ContentType::Social,
        }
    }

    /// The primary payload: body text or URL.
    pub fn content(&self) -> &str {
        match self {
            BlockBody::Text { body, .. } => body,
            BlockBody::Image { url, .. }
            | BlockBody::Video { url, .. }
            | BlockBody::Audio { url, .. }
            | BlockBody::Social { url, .. } => url,
        }
    }

    /// The secondary string: subtitle, tag or platform name.
    pub fn metadata(&self) -> Option<&str> {
        match self {
            BlockBody::Text { subtitle, .. } => subtitle.as_deref(),
            BlockBody::Image { tag, .. }
            | BlockBody::Video { tag, .. }
            | BlockBody::Audio { tag, .. } => tag.as_deref(),
            BlockBody::Social { platform, .. } => platform.as_deref(),
        }
    }

    pub fn set_content(&mut self, value: String) {
        match self {
            BlockBody::Text { body, .. } => *body = value,
            BlockBody::Image { url, .. }
            | BlockBody::Video { url, .. }
            | BlockBody::Audio { url, .. }
            | BlockBody::Social { url, .. } => *url = value,
        }
    }

    pub fn set_metadata(&mut self, value: Option<String>) {
        match self {
            BlockBody::Text { subtitle, .. } => *subtitle = value,
            BlockBody::Image { tag, .. }
            | BlockBody::Video { tag, .. }
            | BlockBody::Audio { tag, .. } => *tag = value,
            BlockBody::Social { platform, .. } => *platform = value,
        }
    }
}

/// One editable block of page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireBlock", into = "WireBlock")]
pub struct ContentBlock {
    pub id: String,
    pub title: String,
    pub body: BlockBody,
}

impl ContentBlock {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: BlockBody) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body,
        }
    }

    /// Block as created by the editor's "add" buttons.
    pub fn placeholder(id: impl Into<String>, kind: ContentType) -> Self {
        Self::new(id, NEW_BLOCK_TITLE, BlockBody::placeholder(kind))
    }

    pub fn content_type(&self) -> ContentType {
        self.body.content_type()
    }

    pub fn content(&self) -> &str {
        self.body.content()
    }

    pub fn metadata(&self) -> Option<&str> {
        self.body.metadata()
    }

    /// Whether this block is the designated bio photo.
    pub fn is_bio_photo(&self) -> bool {
        self.metadata() == Some(BIO_PHOTO_TAG)
    }

    /// Apply a partial update, touching only the fields present in `patch`.
    pub fn apply(&mut self, patch: ContentBlockPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.body.set_content(content);
        }
        if let Some(metadata) = patch.metadata {
            self.body.set_metadata(Some(metadata));
        }
    }
}

/// Partial update for a content block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlockPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// Flat JSON shape of a content block.
#[derive(Serialize, Deserialize)]
struct WireBlock {
    id: String,
    #[serde(rename = "type")]
    kind: ContentType,
    title: String,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<String>,
}

impl From<WireBlock> for ContentBlock {
    fn from(wire: WireBlock) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            body: BlockBody::from_parts(wire.kind, wire.content, wire.metadata),
        }
    }
}

impl From<ContentBlock> for WireBlock {
    fn from(block: ContentBlock) -> Self {
        let kind = block.content_type();
        let metadata = block.metadata().map(String::from);
        let content = match block.body {
            BlockBody::Text { body, .. } => body,
            BlockBody::Image { url, .. }
            | BlockBody::Video { url, .. }
            | BlockBody::Audio { url, .. }
            | BlockBody::Social { url, .. } => url,
        };
        Self {
            id: block.id,
            kind,
            title: block.title,
            content,
            metadata,
        }
    }
}
