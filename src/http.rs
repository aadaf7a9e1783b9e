//! Proxy-aware HTTP GET
//!
//! One request, no retries. A 429 answer is reported as
//! [`Error::RateLimited`] so callers can decide whether to back off; any
//! other status hands back the body as-is.

use crate::error::{Error, Result};
use reqwest::{Client, Proxy, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A reusable GET client bound to one proxy (or none).
#[derive(Debug, Clone)]
pub struct HttpGetter {
    client: Client,
}

impl HttpGetter {
    /// Build a client that sends every request through `proxy_url`, or
    /// connects directly when `proxy_url` is `None`.
    pub fn new(proxy_url: Option<&str>, timeout: Duration) -> Result<Self> {
        let builder = Client::builder().timeout(timeout);

        let builder = match proxy_url {
            Some(raw) => {
                let proxy = parse_proxy_url(raw)?;
                builder.proxy(Proxy::all(proxy)?)
            }
            None => builder.no_proxy(),
        };

        let client = builder.build()?;
        Ok(Self { client })
    }

    /// Fetch `target_url` and return the response body.
    pub async fn get(&self, target_url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(target_url)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Failed to send request to {}: {}", target_url, e);
            e
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Too many requests: {}", target_url);
            return Err(Error::RateLimited {
                url: target_url.to_string(),
            });
        }
        if !status.is_success() {
            warn!("GET {} returned {}", target_url, status);
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read response from {}: {}", target_url, e);
            e
        })?;

        debug!("GET {} -> {} ({} bytes)", target_url, status, body.len());
        Ok(body.to_vec())
    }
}

fn parse_proxy_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| {
        warn!("Failed to parse proxy URL {}: {}", raw, source);
        Error::InvalidProxy {
            url: raw.to_string(),
            source,
        }
    })
}

/// Fetch `target_url` through `proxy_url` and return the body bytes.
pub async fn http_get(target_url: &str, proxy_url: &str) -> Result<Vec<u8>> {
    HttpGetter::new(Some(proxy_url), DEFAULT_TIMEOUT)?
        .get(target_url)
        .await
}
