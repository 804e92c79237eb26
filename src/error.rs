use reqwest::StatusCode;
use thiserror::Error;

use crate::yt_interface::ApiEndpoint;

/// Transport-level failures talking to the API server. Never retried.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}")]
    Status {
        endpoint: ApiEndpoint,
        status: StatusCode,
    },
}

impl ClientError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status(),
            Self::InvalidBaseUrl { .. } => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
