//! Data models for the news feed returned by the backend API.
//!
//! - [`NewsItem`]: one record from `data.newsfeeds.data`
//! - [`NewsId`]: identifier, which the backend sends as either a number or a string
//! - [`PublishAt`]: publish timestamp, usually an ISO-8601 string or epoch milliseconds
//!
//! Items are read-only once decoded; the renderer only borrows them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON pointer to the item list inside the response envelope
/// `{ "data": { "newsfeeds": { "data": [...] } } }`.
pub const NEWS_DATA_POINTER: &str = "/data/newsfeeds/data";

/// Dotted form of [`NEWS_DATA_POINTER`], used in diagnostics.
pub const NEWS_DATA_PATH: &str = "data.newsfeeds.data";

/// A single news item as served by the backend.
///
/// Unknown fields are ignored so the widget keeps working when the backend
/// adds columns.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewsItem {
    /// Identifier used in the detail page link.
    pub id: NewsId,
    /// Headline, rendered verbatim and slugified for the link.
    pub title: String,
    /// Body text. May contain markup.
    #[serde(default)]
    pub message: Option<String>,
    /// Header background image. Absent, null and empty all mean "use the default".
    #[serde(default)]
    pub img_url: Option<String>,
    /// Absent or null renders as an invalid date; the card is still shown.
    #[serde(default)]
    pub publish_at: Option<PublishAt>,
}

impl NewsItem {
    /// The image to show in the card header, falling back to `default` when
    /// `img_url` is absent or empty.
    pub fn image_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.img_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => default,
        }
    }

    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// News identifier. The backend is not consistent about its type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NewsId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsId::Number(n) => write!(f, "{n}"),
            NewsId::Text(s) => f.write_str(s),
        }
    }
}

/// Raw publish timestamp. Interpretation lives in [`crate::dates`].
///
/// Any JSON value is accepted so one odd item never fails the whole feed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PublishAt {
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Fractional milliseconds since the Unix epoch.
    FractionalMillis(f64),
    /// ISO-8601 / RFC 3339 text.
    Text(String),
    /// Booleans, objects, arrays: never a valid date.
    Other(serde_json::Value),
}
