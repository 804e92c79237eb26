use std::{future::Future, time::Duration};

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{ClientError, ClientResult},
    yt_interface::{ApiEndpoint, DEFAULT_API_URL},
};

pub struct ApiClientOptions {
    /// Base URL of the API server, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Overall per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ApiClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            user_agent: concat!("ytapi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// JSON body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct VideoRequest<'a> {
    pub url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<&'a [String]>,
}

impl<'a> VideoRequest<'a> {
    pub fn new(url: &'a str, languages: &'a [String]) -> Self {
        Self {
            url,
            languages: (!languages.is_empty()).then_some(languages),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(options: ApiClientOptions) -> ClientResult<Self> {
        let base_url = options.base_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: options.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: options.base_url,
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        let mut builder = reqwest::Client::builder().user_agent(options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: ApiEndpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn post(
        &self,
        endpoint: ApiEndpoint,
        body: &VideoRequest<'_>,
    ) -> ClientResult<reqwest::Response> {
        let api_url = self.endpoint_url(endpoint);
        log::debug!("POST {} ({})", api_url, endpoint.as_str());

        let response = self
            .http_client
            .post(api_url.as_str())
            .json(body)
            .send()
            .await
            .inspect_err(|e| log::warn!("{} unreachable: {}", api_url, e))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered {}", api_url, status);
            return Err(ClientError::Status { endpoint, status });
        }

        Ok(response)
    }
}

pub trait VideoApi {
    /// Fetches the video's metadata as an opaque JSON document.
    fn video_data<'a>(&'a self, url: &'a str) -> impl Future<Output = ClientResult<Value>> + 'a;
    /// Fetches the plain-text captions, optionally restricted to `languages`.
    fn video_captions<'a>(
        &'a self,
        url: &'a str,
        languages: &'a [String],
    ) -> impl Future<Output = ClientResult<String>> + 'a;
    /// Fetches the timestamped captions, one entry per cue.
    fn video_timestamps<'a>(
        &'a self,
        url: &'a str,
        languages: &'a [String],
    ) -> impl Future<Output = ClientResult<Vec<Value>>> + 'a;
}

impl VideoApi for ApiClient {
    fn video_data<'a>(&'a self, url: &'a str) -> impl Future<Output = ClientResult<Value>> + 'a {
        async move {
            let body = VideoRequest::new(url, &[]);
            let response = self.post(ApiEndpoint::VideoData, &body).await?;
            Ok(response.json().await?)
        }
    }

    fn video_captions<'a>(
        &'a self,
        url: &'a str,
        languages: &'a [String],
    ) -> impl Future<Output = ClientResult<String>> + 'a {
        async move {
            let body = VideoRequest::new(url, languages);
            let response = self.post(ApiEndpoint::VideoCaptions, &body).await?;
            Ok(response.text().await?)
        }
    }

    fn video_timestamps<'a>(
        &'a self,
        url: &'a str,
        languages: &'a [String],
    ) -> impl Future<Output = ClientResult<Vec<Value>>> + 'a {
        async move {
            let body = VideoRequest::new(url, languages);
            let response = self.post(ApiEndpoint::VideoTimestamps, &body).await?;
            Ok(response.json().await?)
        }
    }
}
