//! Command-line interface definitions for the news widget.
//!
//! Every flag maps onto a [`WidgetConfig`] field and overrides the value from
//! the optional YAML file given with `--config`.

use crate::config::WidgetConfig;
use crate::query::SortOrder;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the news widget.
///
/// # Examples
///
/// ```sh
/// # Render to stdout
/// news_widget --base-url https://api.example.com
///
/// # French dates, custom placeholder, written to a file
/// news_widget -b https://api.example.com --locale fr-FR \
///     --default-image ./styles/news-default.jpg -o public/news.html
///
/// # Everything from a config file
/// news_widget --config widget.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Backend root URL; also the root of the detail page links
    #[arg(short, long, env = "NEWS_WIDGET_BASE_URL")]
    pub base_url: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the HTML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of items to request
    #[arg(long)]
    pub limit: Option<u32>,

    /// Number of items to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// Publish date ordering
    #[arg(long, value_enum)]
    pub order_by: Option<SortOrder>,

    /// Restrict the feed to one target
    #[arg(long)]
    pub target_id: Option<String>,

    /// Locale tag for dates (defaults to LC_ALL / LC_TIME / LANG)
    #[arg(long, env = "NEWS_WIDGET_LOCALE")]
    pub locale: Option<String>,

    /// Header image for items without one
    #[arg(long)]
    pub default_image: Option<String>,

    /// HTML-escape title, message and image URL (`--escape-html false` turns
    /// off a config file's `escape-html: true`)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub escape_html: Option<bool>,

    /// User-Agent header sent to the backend
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Referer header sent to the backend
    #[arg(long)]
    pub referer: Option<String>,

    /// Origin header sent to the backend
    #[arg(long)]
    pub origin: Option<String>,

    /// Emit only the card container, without the <style> block
    #[arg(long)]
    pub fragment_only: bool,
}

impl Cli {
    /// The subset of configuration given on the command line.
    pub fn overrides(&self) -> WidgetConfig {
        WidgetConfig {
            base_url: self.base_url.clone(),
            limit: self.limit,
            offset: self.offset,
            order_by: self.order_by,
            target_id: self.target_id.clone(),
            locale: self.locale.clone(),
            default_image: self.default_image.clone(),
            escape_html: self.escape_html,
            user_agent: self.user_agent.clone(),
            referer: self.referer.clone(),
            origin: self.origin.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "news_widget",
            "--base-url",
            "https://api.example.com",
            "--output",
            "./public/news.html",
        ]);

        assert_eq!(cli.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(cli.output, Some(PathBuf::from("./public/news.html")));
        assert!(!cli.fragment_only);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "news_widget",
            "-b",
            "https://api.example.com",
            "-c",
            "widget.yaml",
            "-o",
            "/tmp/news.html",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("widget.yaml")));
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/news.html")));
    }

    #[test]
    fn test_overrides_only_set_fields() {
        let cli = Cli::parse_from([
            "news_widget",
            "--limit",
            "6",
            "--order-by",
            "asc",
            "--escape-html",
        ]);
        let overrides = cli.overrides();

        assert_eq!(overrides.limit, Some(6));
        assert_eq!(overrides.order_by, Some(SortOrder::Asc));
        assert_eq!(overrides.escape_html, Some(true));
        assert_eq!(overrides.offset, None);
        assert_eq!(overrides.referer, None);
    }

    #[test]
    fn test_escape_flag_absent_leaves_file_value() {
        let cli = Cli::parse_from(["news_widget"]);
        let file = WidgetConfig {
            escape_html: Some(true),
            ..WidgetConfig::default()
        };
        assert_eq!(file.merge(cli.overrides()).escape_html, Some(true));
    }

    #[test]
    fn test_escape_flag_false_overrides_file_value() {
        let file = WidgetConfig {
            escape_html: Some(true),
            ..WidgetConfig::default()
        };
        for args in [
            &["news_widget", "--escape-html", "false"][..],
            &["news_widget", "--escape-html=false"][..],
        ] {
            let cli = Cli::parse_from(args.iter().copied());
            assert_eq!(cli.escape_html, Some(false));
            assert_eq!(file.clone().merge(cli.overrides()).escape_html, Some(false));
        }
    }

    #[test]
    fn test_order_by_uses_query_sort_order() {
        let cli = Cli::parse_from(["news_widget", "--order-by", "desc"]);
        assert_eq!(cli.order_by, Some(SortOrder::Desc));
        assert_eq!(cli.overrides().order_by.map(SortOrder::as_str), Some("desc"));
        assert!(Cli::try_parse_from(["news_widget", "--order-by", "newest"]).is_err());
    }
}
