//! The news widget lifecycle: configure, fetch once, render.
//!
//! [`NewsWidget::initialize`] validates configuration and builds the query
//! and card template without touching the network. [`NewsWidget::render`]
//! performs the single fetch and produces the markup. [`attach`] chains the
//! two the way an embedding page would: every failure is logged and the
//! caller just gets nothing back.

use crate::client::FetchNews;
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::models::NewsItem;
use crate::query::{BaseUrl, QueryParameters};
use crate::render::{CardTemplate, RenderOptions};
use crate::styles::style_block;
use tracing::{debug, error, info, instrument};

/// A configured widget bound to a news source.
#[derive(Debug)]
pub struct NewsWidget<C> {
    client: C,
    query: QueryParameters,
    template: CardTemplate,
    with_styles: bool,
}

impl<C: FetchNews> NewsWidget<C> {
    /// Validate `config` and prepare the widget. Issues no request.
    ///
    /// # Errors
    ///
    /// [`WidgetError::MissingBaseUrl`] or [`WidgetError::InvalidBaseUrl`].
    pub fn initialize(
        config: &WidgetConfig,
        options: RenderOptions,
        client: C,
    ) -> Result<Self, WidgetError> {
        let raw = config
            .base_url
            .as_deref()
            .ok_or(WidgetError::MissingBaseUrl)?;
        let base_url = BaseUrl::parse(raw)?;
        info!(%base_url, "News widget initialized");
        Ok(Self {
            client,
            query: config.query(),
            template: CardTemplate::new(base_url, options),
            with_styles: true,
        })
    }

    /// Emit only the card container, without the `<style>` block.
    pub fn without_styles(mut self) -> Self {
        self.with_styles = false;
        self
    }

    pub fn query(&self) -> &QueryParameters {
        &self.query
    }

    /// Fetch the items for the configured query, in backend order.
    pub async fn fetch(&self) -> Result<Vec<NewsItem>, WidgetError> {
        let url = self.query.news_url(self.template.base_url())?;
        self.client.fetch_news(&url).await
    }

    /// Fetch once and render the stylesheet followed by the card container.
    #[instrument(level = "info", skip_all, fields(base_url = %self.template.base_url()))]
    pub async fn render(&self) -> Result<String, WidgetError> {
        let items = self.fetch().await?;
        let mut out = String::new();
        if self.with_styles {
            out.push_str(&style_block());
        }
        out.push_str(&self.template.render_list(&items));
        info!(cards = items.len(), "Rendered news widget");
        Ok(out)
    }
}

/// Run one attach cycle: initialize, fetch, render.
///
/// Failures are logged and yield `None`; nothing is retried. With no
/// `base-url` the source is never called.
pub async fn attach<C: FetchNews>(
    config: &WidgetConfig,
    options: RenderOptions,
    client: C,
    with_styles: bool,
) -> Option<String> {
    let widget = match NewsWidget::initialize(config, options, client) {
        Ok(widget) if with_styles => widget,
        Ok(widget) => widget.without_styles(),
        Err(e) => {
            error!(error = %e, "NewsWidget: missing or invalid 'base-url' attribute");
            return None;
        }
    };
    debug!(query = ?widget.query(), "Prepared news query");

    match widget.render().await {
        Ok(markup) => Some(markup),
        Err(e) => {
            error!(error = %e, "NewsWidget: failed to fetch news");
            None
        }
    }
}
