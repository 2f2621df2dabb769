//! Widget configuration.
//!
//! Configuration comes from an optional YAML file and from command-line
//! flags; flags win field by field. Keys use the attribute spelling of the
//! embedding page:
//!
//! ```yaml
//! base-url: https://api.example.com
//! limit: 4
//! locale: fr-FR
//! default-image: ./styles/news-default.jpg
//! escape-html: false
//! referer: https://www.example.com/
//! origin: https://www.example.com
//! ```

use crate::client::{CallerIdentity, DEFAULT_USER_AGENT};
use crate::dates::DateStyle;
use crate::error::WidgetError;
use crate::query::{QueryParameters, SortOrder};
use crate::render::{DEFAULT_IMAGE, RenderOptions};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Every field is optional; unset fields take the widget defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct WidgetConfig {
    /// Backend root, also the root of the detail page links. Required.
    pub base_url: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub order_by: Option<SortOrder>,
    pub target_id: Option<String>,
    /// Locale tag for date formatting, e.g. `fr-FR`.
    pub locale: Option<String>,
    pub default_image: Option<String>,
    pub escape_html: Option<bool>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub origin: Option<String>,
}

impl WidgetConfig {
    /// Read a YAML config file.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, WidgetError> {
        let path = path.as_ref();
        let config_error = |reason: String| WidgetError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| config_error(e.to_string()))?;
        let config: WidgetConfig =
            serde_yaml::from_str(&raw).map_err(|e| config_error(e.to_string()))?;
        info!("Loaded widget configuration");
        Ok(config)
    }

    /// Overlay `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: WidgetConfig) -> WidgetConfig {
        WidgetConfig {
            base_url: overrides.base_url.or(self.base_url),
            limit: overrides.limit.or(self.limit),
            offset: overrides.offset.or(self.offset),
            order_by: overrides.order_by.or(self.order_by),
            target_id: overrides.target_id.or(self.target_id),
            locale: overrides.locale.or(self.locale),
            default_image: overrides.default_image.or(self.default_image),
            escape_html: overrides.escape_html.or(self.escape_html),
            user_agent: overrides.user_agent.or(self.user_agent),
            referer: overrides.referer.or(self.referer),
            origin: overrides.origin.or(self.origin),
        }
    }

    pub fn query(&self) -> QueryParameters {
        let defaults = QueryParameters::default();
        QueryParameters {
            limit: self.limit.unwrap_or(defaults.limit),
            offset: self.offset.unwrap_or(defaults.offset),
            order_by: self.order_by.unwrap_or(defaults.order_by),
            target_id: self.target_id.clone().filter(|t| !t.is_empty()),
            ..defaults
        }
    }

    /// Render options, using `system_locale` when no locale is configured.
    pub fn render_options(
        &self,
        system_locale: Option<&str>,
        utc_offset: FixedOffset,
    ) -> RenderOptions {
        let locale = self.locale.as_deref().or(system_locale).unwrap_or("en-US");
        RenderOptions {
            default_image: self
                .default_image
                .clone()
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            date_style: DateStyle::from_locale(locale),
            utc_offset,
            escape_html: self.escape_html.unwrap_or(false),
        }
    }

    pub fn identity(&self) -> CallerIdentity {
        CallerIdentity {
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            referer: self.referer.clone(),
            origin: self.origin.clone(),
        }
    }
}
