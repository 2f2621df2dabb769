//! Backend access for the news feed.
//!
//! The widget talks to the backend through the [`FetchNews`] trait so the
//! orchestrator can be driven by the real HTTP client or by an in-memory
//! source.
//!
//! - [`FetchNews`]: one GET, returning the decoded item list
//! - [`HttpNewsClient`]: `reqwest` implementation sending the caller identity headers
//! - [`extract_items`]: pulls `data.newsfeeds.data` out of a response body
//!
//! One attempt per fetch: no retry, no timeout.

use crate::error::WidgetError;
use crate::models::{NEWS_DATA_PATH, NEWS_DATA_POINTER, NewsItem};
use crate::utils::truncate_for_log;
use reqwest::header::{ACCEPT, ORIGIN, REFERER, USER_AGENT};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("news_widget/", env!("CARGO_PKG_VERSION"));

/// Source of news items.
pub trait FetchNews {
    /// Issue one request for `url` and return the items in backend order.
    async fn fetch_news(&self, url: &Url) -> Result<Vec<NewsItem>, WidgetError>;
}

/// Identity headers forwarded with the request, standing in for the
/// browsing context of the embedding page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_agent: String,
    pub referer: Option<String>,
    pub origin: Option<String>,
}

impl Default for CallerIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: None,
            origin: None,
        }
    }
}

/// [`FetchNews`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpNewsClient {
    http: reqwest::Client,
    identity: CallerIdentity,
}

impl HttpNewsClient {
    pub fn new(identity: CallerIdentity) -> Self {
        Self::with_http(reqwest::Client::new(), identity)
    }

    /// Use a preconfigured `reqwest` client (proxy, TLS roots, ...).
    pub fn with_http(http: reqwest::Client, identity: CallerIdentity) -> Self {
        Self { http, identity }
    }
}

impl FetchNews for HttpNewsClient {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch_news(&self, url: &Url) -> Result<Vec<NewsItem>, WidgetError> {
        let t0 = Instant::now();

        let mut request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.identity.user_agent.as_str());
        if let Some(referer) = &self.identity.referer {
            request = request.header(REFERER, referer.as_str());
        }
        if let Some(origin) = &self.identity.origin {
            request = request.header(ORIGIN, origin.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        // The body is decoded whatever the status; a missing data path is the failure.
        if !status.is_success() {
            warn!(%status, "News endpoint returned non-success status");
        }
        let body = response.text().await?;
        debug!(
            %status,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Received news response"
        );

        let items = extract_items(&body).inspect_err(|e| {
            warn!(error = %e, body_preview = %truncate_for_log(&body, 300), "Undecodable news response");
        })?;
        info!(count = items.len(), "Fetched news items");
        Ok(items)
    }
}

/// Decode a response body and return the items at `data.newsfeeds.data`.
///
/// # Errors
///
/// - [`WidgetError::Json`] if the body is not JSON or an item is malformed
/// - [`WidgetError::MissingField`] if the nested path is absent or null
pub fn extract_items(body: &str) -> Result<Vec<NewsItem>, WidgetError> {
    let mut root: Value = serde_json::from_str(body)?;
    let list = root
        .pointer_mut(NEWS_DATA_POINTER)
        .map(Value::take)
        .filter(|v| !v.is_null())
        .ok_or(WidgetError::MissingField(NEWS_DATA_PATH))?;
    Ok(serde_json::from_value(list)?)
}
