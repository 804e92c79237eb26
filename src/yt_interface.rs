use core::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::Serialize;
use serde_json::Value;

/// Endpoints exposed by the YouTube API server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiEndpoint {
    VideoData,
    VideoCaptions,
    VideoTimestamps,
}

impl ApiEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VideoData => "video-data",
            Self::VideoCaptions => "video-captions",
            Self::VideoTimestamps => "video-timestamps",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::VideoData => "/youtube/video-data",
            Self::VideoCaptions => "/youtube/video-captions",
            Self::VideoTimestamps => "/youtube/video-timestamps",
        }
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// What the CLI should fetch for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RequestKind {
    #[default]
    Data,
    Captions,
    Timestamps,
    /// Runs the extractor locally without contacting the server.
    Id,
}

impl RequestKind {
    pub fn endpoint(&self) -> Option<ApiEndpoint> {
        match self {
            Self::Data => Some(ApiEndpoint::VideoData),
            Self::Captions => Some(ApiEndpoint::VideoCaptions),
            Self::Timestamps => Some(ApiEndpoint::VideoTimestamps),
            Self::Id => None,
        }
    }
}

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const VIDEO_ID_LEN: usize = 11;

/// Hosts serving the full site, where the ID lives in the query or a path prefix.
pub const LONG_HOSTS: [&str; 6] = [
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtube-nocookie.com",
    "www.youtube-nocookie.com",
];

/// Link-shortener hosts, where the first path segment is the ID.
pub const SHORT_HOSTS: [&str; 1] = ["youtu.be"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new<S: Into<String>>(s: S) -> Result<Self> {
        let s = s.into();
        if id_len(&s) != VIDEO_ID_LEN {
            return Err(anyhow!(
                "invalid length: expected {} characters, got {}",
                VIDEO_ID_LEN,
                id_len(&s)
            ));
        }

        if !is_video_id_alphabet(&s) {
            return Err(anyhow!("invalid characters in video ID: {}", s));
        }

        Ok(Self(s))
    }

    /// Wraps a captured identifier as-is. Extracted IDs are untrusted.
    pub(crate) fn verbatim<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// True if the ID has the canonical 11-character `[A-Za-z0-9_-]` shape.
    pub fn is_well_formed(&self) -> bool {
        id_len(&self.0) == VIDEO_ID_LEN && is_video_id_alphabet(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn id_len(s: &str) -> usize {
    s.chars().count()
}

fn is_video_id_alphabet(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl From<VideoId> for Value {
    fn from(value: VideoId) -> Self {
        Value::String(value.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VideoId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VideoId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for VideoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
