use core::fmt;

use url::Url;

use crate::{
    extractor::utils::{as_typed, first_query_value, path_segment_after, raw_path},
    yt_interface::{LONG_HOSTS, SHORT_HOSTS},
};

/// A recognized YouTube URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlPattern {
    /// `youtube.com/watch?v=<id>`
    Watch,
    /// `youtu.be/<id>`
    ShortHost,
    /// `youtube.com/embed/<id>`
    Embed,
    /// `youtube.com/v/<id>`
    LegacyV,
    /// `youtube.com/shorts/<id>`
    Shorts,
    /// `youtube.com/live/<id>`
    Live,
}

/// Patterns in the order they are tried. The first capture wins.
pub const PATTERNS: [UrlPattern; 6] = [
    UrlPattern::Watch,
    UrlPattern::ShortHost,
    UrlPattern::Embed,
    UrlPattern::LegacyV,
    UrlPattern::Shorts,
    UrlPattern::Live,
];

impl fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl UrlPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watch => "watch",
            Self::ShortHost => "short_host",
            Self::Embed => "embed",
            Self::LegacyV => "v",
            Self::Shorts => "shorts",
            Self::Live => "live",
        }
    }

    /// True if `url` has the host and path shape of this pattern.
    pub fn matches(&self, url: &Url) -> bool {
        match self {
            Self::Watch => is_long_host(url) && url.path() == "/watch",
            Self::ShortHost => is_short_host(url),
            Self::Embed | Self::LegacyV | Self::Shorts | Self::Live => {
                is_long_host(url) && self.path_prefix().is_some_and(|p| url.path().starts_with(p))
            }
        }
    }

    /// Pulls the identifier out of `url`, if this pattern applies and the capture is non-empty.
    ///
    /// Path captures come back the way `url` normalized them. Use
    /// [`UrlPattern::capture_as_typed`] to get the text of the original input.
    pub fn capture(&self, url: &Url) -> Option<String> {
        self.capture_in(url, None)
    }

    /// Like [`UrlPattern::capture`], but path captures are sliced out of `input`
    /// (the string `url` was parsed from) so they are not percent-encoded.
    pub fn capture_as_typed(&self, input: &str, url: &Url) -> Option<String> {
        self.capture_in(url, raw_path(input))
    }

    fn capture_in(&self, url: &Url, typed_path: Option<&str>) -> Option<String> {
        if !self.matches(url) {
            return None;
        }

        let id = match self {
            Self::Watch => first_query_value(url, "v"),
            _ => {
                let prefix = self.path_prefix()?;
                path_segment_after(url.path(), prefix).map(|parsed| {
                    let typed = typed_path.and_then(|path| path_segment_after(path, prefix));
                    as_typed(parsed, typed)
                })
            }
        }?;

        (!id.is_empty()).then_some(id)
    }

    /// Returns the first pattern that captures an identifier from `url`.
    pub fn detect(url: &Url) -> Option<Self> {
        PATTERNS.into_iter().find(|p| p.capture(url).is_some())
    }

    fn path_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Embed => Some("/embed/"),
            Self::LegacyV => Some("/v/"),
            Self::Shorts => Some("/shorts/"),
            Self::Live => Some("/live/"),
            Self::ShortHost => Some("/"),
            Self::Watch => None,
        }
    }
}

fn is_web_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

fn is_long_host(url: &Url) -> bool {
    is_web_scheme(url) && url.host_str().is_some_and(|h| LONG_HOSTS.contains(&h))
}

fn is_short_host(url: &Url) -> bool {
    is_web_scheme(url) && url.host_str().is_some_and(|h| SHORT_HOSTS.contains(&h))
}
