//! YouTube video ID extraction.
//!
//! [`extract_video_id`] is total over all strings: anything that is not a
//! recognized YouTube link yields `None` rather than an error. Captured IDs are
//! returned verbatim and are not validated, so treat them as untrusted and use
//! [`VideoId::is_well_formed`] when the canonical shape matters.

pub mod patterns;
mod utils;

use url::Url;

pub use crate::extractor::patterns::{PATTERNS, UrlPattern};
use crate::yt_interface::VideoId;

/// Extracts the video ID from a YouTube URL.
///
/// ```
/// use ytapi::extract_video_id;
///
/// let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
/// assert_eq!(id.as_str(), "dQw4w9WgXcQ");
///
/// assert!(extract_video_id("https://invalid-url.com").is_none());
/// ```
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    extract_with_pattern(url).map(|(_, id)| id)
}

/// Like [`extract_video_id`], also reporting which [`UrlPattern`] matched.
pub fn extract_with_pattern(url: &str) -> Option<(UrlPattern, VideoId)> {
    let parsed = Url::parse(url).ok()?;

    PATTERNS.iter().find_map(|pattern| {
        pattern
            .capture_as_typed(url, &parsed)
            .map(|id| (*pattern, VideoId::verbatim(id)))
    })
}
