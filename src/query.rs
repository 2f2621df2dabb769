//! Request construction for the backend `news` endpoint.
//!
//! The widget always asks for the most recent public items:
//!
//! ```text
//! GET {base}/news?limit=4&offset=0&order_by=desc&sort_by=publish_at&is_public=true&target_id=
//! ```

use crate::error::WidgetError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Validated backend root. Trailing slashes are removed so that joined
/// paths never contain `//`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Parse a base URL supplied by configuration.
    ///
    /// Blank input is [`WidgetError::MissingBaseUrl`], anything that is not an
    /// absolute URL is [`WidgetError::InvalidBaseUrl`].
    pub fn parse(raw: &str) -> Result<Self, WidgetError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(WidgetError::MissingBaseUrl);
        }
        Url::parse(trimmed).map_err(|source| WidgetError::InvalidBaseUrl {
            url: raw.to_string(),
            source,
        })?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Publish date ordering. Shared by the YAML config and the `--order-by` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query string sent with every fetch. Built fresh for each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    pub limit: u32,
    pub offset: u32,
    pub order_by: SortOrder,
    pub sort_by: String,
    pub is_public: bool,
    pub target_id: Option<String>,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            limit: 4,
            offset: 0,
            order_by: SortOrder::Desc,
            sort_by: "publish_at".to_string(),
            is_public: true,
            target_id: None,
        }
    }
}

impl QueryParameters {
    /// Key/value pairs in wire order. An absent `target_id` is sent empty.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("order_by", self.order_by.as_str().to_string()),
            ("sort_by", self.sort_by.clone()),
            ("is_public", self.is_public.to_string()),
            ("target_id", self.target_id.clone().unwrap_or_default()),
        ]
    }

    /// Full request URL: `{base}/news?{pairs}`.
    pub fn news_url(&self, base: &BaseUrl) -> Result<Url, WidgetError> {
        let raw = format!("{}/news", base.as_str());
        let mut url = Url::parse(&raw).map_err(|source| WidgetError::InvalidBaseUrl {
            url: base.to_string(),
            source,
        })?;
        url.query_pairs_mut().extend_pairs(self.pairs());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_url() {
        let base = BaseUrl::parse("https://example.com").unwrap();
        let url = QueryParameters::default().news_url(&base).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/news?limit=4&offset=0&order_by=desc&sort_by=publish_at&is_public=true&target_id="
        );
    }

    #[test]
    fn test_query_with_target_and_paging() {
        let base = BaseUrl::parse("https://api.example.com/v1/").unwrap();
        let query = QueryParameters {
            limit: 10,
            offset: 20,
            order_by: SortOrder::Asc,
            target_id: Some("team 3".to_string()),
            ..QueryParameters::default()
        };
        let url = query.news_url(&base).unwrap();
        assert_eq!(url.path(), "/v1/news");
        assert_eq!(
            url.query(),
            Some("limit=10&offset=20&order_by=asc&sort_by=publish_at&is_public=true&target_id=team+3")
        );
    }

    #[test]
    fn test_base_url_trims_trailing_slashes() {
        let base = BaseUrl::parse("  https://example.com//  ").unwrap();
        assert_eq!(base.as_str(), "https://example.com");
    }

    #[test]
    fn test_base_url_missing() {
        assert!(matches!(
            BaseUrl::parse("   "),
            Err(WidgetError::MissingBaseUrl)
        ));
    }

    #[test]
    fn test_base_url_invalid() {
        assert!(matches!(
            BaseUrl::parse("not a url"),
            Err(WidgetError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_sort_order_yaml_names() {
        let order: SortOrder = serde_yaml::from_str("asc").unwrap();
        assert_eq!(order, SortOrder::Asc);
    }
}
