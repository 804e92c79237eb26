pub mod client;
pub mod error;
pub mod extractor;
pub mod format;
#[cfg(feature = "logging")]
pub mod logger;
pub mod yt_interface;

pub use crate::client::*;
pub use crate::error::*;
pub use crate::extractor::{UrlPattern, extract_video_id, extract_with_pattern};
pub use crate::yt_interface::*;
