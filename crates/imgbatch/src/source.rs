//! Per-entry resolution: classify a location and decode it
//!
//! Each entry is either a local file path or a URL. Classification is
//! an explicit two-way split done up front (an existence check on the
//! exact entry string), not a try/fallback chain, so each branch is
//! independently testable.

use crate::error::ResolveError;
use crate::DEFAULT_USER_AGENT;
use bytes::Bytes;
use futures::StreamExt;
use image::DynamicImage;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Connect and total-response timeout per fetch
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One classified image location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// An existing local file path
    File(String),
    /// Anything else; resolved over HTTP
    Remote(String),
}

impl Location {
    /// Classify an entry by filesystem existence of the exact string
    ///
    /// No path normalization or expansion is applied; a line that does
    /// not name an existing file is treated as a URL.
    pub fn classify(entry: &str) -> Self {
        if Path::new(entry).exists() {
            Location::File(entry.to_string())
        } else {
            Location::Remote(entry.to_string())
        }
    }
}

/// Resolve one location into a decoded image
///
/// Local files are decoded directly from disk. URLs are fetched with a
/// browser-like User-Agent and a 10-second timeout; the response must
/// declare an `image/` content type and the body is fully decoded
/// before returning, so no error can surface later from lazy decoding.
pub async fn resolve_one(entry: &str) -> Result<DynamicImage, ResolveError> {
    match Location::classify(entry) {
        Location::File(path) => {
            debug!(path = %path, "decoding local file");
            image::open(&path).map_err(ResolveError::from_decode)
        }
        Location::Remote(url) => {
            debug!(url = %url, "fetching remote image");
            let body = fetch_image_bytes(&url).await?;
            image::load_from_memory(&body).map_err(ResolveError::from_decode)
        }
    }
}

/// Fetch a URL and return the raw body bytes
///
/// Fails on malformed URLs, transport errors, non-2xx statuses, and
/// responses whose content type is not an image.
async fn fetch_image_bytes(url: &str) -> Result<Bytes, ResolveError> {
    // Reject malformed URLs up front with the transport-level wrapper
    Url::parse(url).map_err(|e| ResolveError::Network(e.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .connect_timeout(FETCH_TIMEOUT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(ResolveError::from_reqwest)?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(ResolveError::from_reqwest)?
        .error_for_status()
        .map_err(ResolveError::from_reqwest)?;

    // Missing header counts as empty, which fails the prefix check
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.starts_with("image/") {
        return Err(ResolveError::ContentType(content_type));
    }

    read_body(response).await
}

/// Drain the response body stream into one buffer
///
/// The client-level timeout covers the whole read; a mid-stream error
/// aborts the entry rather than decoding a truncated image.
async fn read_body(response: reqwest::Response) -> Result<Bytes, ResolveError> {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(ResolveError::from_reqwest)?;
        body.extend_from_slice(&bytes);
    }

    Ok(Bytes::from(body))
}
