//! Social platform classification.

use serde::{Deserialize, Serialize};

/// Icon family for a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    YouTube,
    Twitter,
    TikTok,
    #[default]
    Link,
}

impl SocialPlatform {
    /// Classify a free-form platform label ("instagram", "My Facebook", ...).
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("instagram") {
            SocialPlatform::Instagram
        } else if label.contains("facebook") {
            SocialPlatform::Facebook
        } else if label.contains("youtube") {
            SocialPlatform::YouTube
        } else if label.contains("twitter") {
            SocialPlatform::Twitter
        } else if label.contains("tiktok") {
            SocialPlatform::TikTok
        } else {
            SocialPlatform::Link
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::TikTok => "tiktok",
            SocialPlatform::Link => "link",
        }
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
