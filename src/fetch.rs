//! Outbound HTTP: provider profiles and profile pictures.

use std::time::Duration;

use axum::body::Bytes;
use tracing::debug;
use url::Url;

use crate::constants::{UNKNOWN_CONTENT_TYPE, USER_AGENT};
use crate::error::CardError;

/// Picture bytes along with the content type sniffed from them.
#[derive(Clone, Debug)]
pub struct RawImage {
    /// The downloaded body.
    pub bytes: Bytes,
    /// MIME type detected from the leading bytes, not the response headers.
    pub content_type: &'static str,
}

/// Detects the MIME type of `bytes` from their magic numbers.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    infer::get(bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or(UNKNOWN_CONTENT_TYPE)
}

/// Shared HTTP client for upstream requests.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Builds a client; `timeout` bounds each whole request when set.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetches the raw profile document from a provider.
    pub async fn fetch_identity(&self, url: &Url) -> Result<Bytes, CardError> {
        debug!("Fetching profile from {}", url);
        self.get_bytes(url.as_str()).await
    }

    /// Fetches a profile picture. `url` comes straight from the provider and may be empty.
    pub async fn fetch_picture(&self, url: &str) -> Result<RawImage, CardError> {
        debug!("Fetching picture from {:?}", url);
        let bytes = self.get_bytes(url).await?;
        let content_type = sniff_content_type(&bytes);
        debug!("Picture is {} bytes of {}", bytes.len(), content_type);
        Ok(RawImage {
            bytes,
            content_type,
        })
    }

    async fn get_bytes(&self, url: &str) -> Result<Bytes, CardError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| CardError::UpstreamFetch(format!("GET {url:?}: {err}")))?;
        response
            .bytes()
            .await
            .map_err(|err| CardError::BodyRead(format!("GET {url:?}: {err}")))
    }
}
