//! YouTube URL normalization.
//!
//! Editors paste whatever link their browser shows; the page needs the
//! embeddable player URL.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Query string appended to every normalized embed URL.
const EMBED_PARAMS: &str = "rel=0&modestbranding=1";

static FALLBACK_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com(?:/embed/|/v/|/watch\?v=|/watch\?.+&v=))([\w-]{11})")
        .expect("valid youtube id regex")
});

/// Convert a YouTube watch/short/share link into an embed URL.
///
/// Anything that is not recognizably a YouTube video link is returned
/// unchanged.
pub fn embed_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if !url.contains("youtube.com") && !url.contains("youtu.be") {
        return url.to_string();
    }

    let video_id = match Url::parse(url) {
        Ok(parsed) => video_id_from_url(&parsed),
        Err(_) => FALLBACK_ID
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
    };

    match video_id {
        Some(id) if !id.is_empty() => {
            format!("https://www.youtube.com/embed/{}?{}", id, EMBED_PARAMS)
        }
        _ => url.to_string(),
    }
}

fn video_id_from_url(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    let path = url.path();

    if host.contains("youtube.com") {
        if path == "/watch" {
            return url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned());
        }
        if path.starts_with("/embed/") || path.starts_with("/shorts/") {
            return path.split('/').nth(2).map(String::from);
        }
        None
    } else if host.contains("youtu.be") {
        Some(path.trim_start_matches('/').to_string())
    } else {
        None
    }
}
