//! Error type shared by the widget modules.
//!
//! Every failure the widget can hit while configuring, fetching or writing
//! is one variant of [`WidgetError`]. The binary converts it into a
//! `Box<dyn Error>` at the top level.

use std::path::PathBuf;

/// Failures raised while configuring, fetching or emitting the widget.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// No `base-url` was supplied by the embedding page / CLI / config file.
    #[error("missing 'base-url' attribute")]
    MissingBaseUrl,

    #[error("invalid base-url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("news request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The body was not JSON, or an item inside it did not match [`crate::models::NewsItem`].
    #[error("failed to decode news response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("news response has no `{0}` field")]
    MissingField(&'static str),

    #[error("failed to load config file {path}: {reason}", path = path.display())]
    Config { path: PathBuf, reason: String },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
