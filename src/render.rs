//! Card template and list renderer.
//!
//! One [`NewsItem`] becomes one `.wrapper` fragment linking to the detail
//! page; the list renderer concatenates fragments in input order inside a
//! single `.news-widget-container` element.
//!
//! Title, message and image URL are interpolated verbatim unless
//! [`RenderOptions::escape_html`] is set, so the backend data is trusted
//! markup by default. When escaping, the image URL is also percent-encoded
//! so it cannot leave the quoted CSS `url('...')`.

use crate::dates::{DateStyle, format_publish_date};
use crate::models::NewsItem;
use crate::query::BaseUrl;
use crate::slug::slugify;
use chrono::{FixedOffset, Offset, Utc};
use itertools::Itertools;
use std::borrow::Cow;
use tracing::debug;

/// Header image used when an item has no `img_url`.
pub const DEFAULT_IMAGE: &str = "./news-default.jpg";

/// Path segment between the base URL and `{id}/{slug}` in card links.
pub const DETAIL_PATH: &str = "app/nos-actualites";

pub const CONTAINER_CLASS: &str = "news-widget-container";

/// Presentation knobs that do not change the markup structure.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub default_image: String,
    pub date_style: DateStyle,
    /// Viewer's UTC offset, used to pick the calendar day.
    pub utc_offset: FixedOffset,
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_image: DEFAULT_IMAGE.to_string(),
            date_style: DateStyle::default(),
            utc_offset: Utc.fix(),
            escape_html: false,
        }
    }
}

/// Maps news items to card markup for one base URL.
#[derive(Debug, Clone)]
pub struct CardTemplate {
    base_url: BaseUrl,
    options: RenderOptions,
}

impl CardTemplate {
    pub fn new(base_url: BaseUrl, options: RenderOptions) -> Self {
        Self { base_url, options }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// `{base}/app/nos-actualites/{id}/{slug(title)}`
    pub fn detail_link(&self, item: &NewsItem) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url,
            DETAIL_PATH,
            item.id,
            slugify(&item.title)
        )
    }

    fn text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.options.escape_html {
            html_escape::encode_text(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }

    fn attribute<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.options.escape_html {
            html_escape::encode_quoted_attribute(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }

    /// Image URL for the header's inline `background-image`.
    fn css_url<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if !self.options.escape_html {
            return Cow::Borrowed(raw);
        }
        let encoded = css_url_safe(raw);
        Cow::Owned(html_escape::encode_quoted_attribute(&encoded).into_owned())
    }

    /// Render a single card.
    pub fn render_card(&self, item: &NewsItem) -> String {
        let href = self.detail_link(item);
        let image = item.image_or(&self.options.default_image);
        let published = format_publish_date(
            item.publish_at.as_ref(),
            self.options.date_style,
            self.options.utc_offset,
        );

        format!(
            r#"
<div class="wrapper">
  <a class="link" href="{href}">
    <div class="public-card">
      <header class="public-card__header" style="background-image: url('{image}')">
        <div class="public-card__tag-infos">
          <p class="public-card__publish-at">{published}</p>
        </div>
      </header>
      <section class="public-card__body">
        <p class="public-card__title">{title}</p>
        <div class="public-card__content">{message}</div>
      </section>
    </div>
  </a>
</div>
"#,
            href = self.attribute(&href),
            image = self.css_url(image),
            title = self.text(&item.title),
            message = self.text(item.message_text()),
        )
    }

    /// Render every item, in order, inside one grid container.
    ///
    /// An empty slice yields an empty container.
    pub fn render_list(&self, items: &[NewsItem]) -> String {
        debug!(count = items.len(), base_url = %self.base_url, "Rendering news cards");
        let cards = items.iter().map(|item| self.render_card(item)).join("");
        format!(r#"<div class="{CONTAINER_CLASS}">{cards}</div>"#)
    }
}

/// Percent-encode the characters that end a quoted CSS `url()` token or
/// start an escape inside it. Everything else, `%` included, is kept.
fn css_url_safe(raw: &str) -> Cow<'_, str> {
    let needs_encoding =
        |c: char| matches!(c, '\'' | '"' | '(' | ')' | '\\') || c.is_whitespace() || c.is_control();
    if !raw.contains(needs_encoding) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        if needs_encoding(c) {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{byte:02X}"));
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewsId, PublishAt};
    use scraper::{Html, Selector};

    fn item(id: i64, title: &str, img_url: Option<&str>) -> NewsItem {
        NewsItem {
            id: NewsId::Number(id),
            title: title.to_string(),
            message: Some("Hello".to_string()),
            img_url: img_url.map(str::to_string),
            publish_at: Some(PublishAt::Text("2024-01-15T00:00:00Z".to_string())),
        }
    }

    fn template(escape_html: bool) -> CardTemplate {
        CardTemplate::new(
            BaseUrl::parse("https://example.com").unwrap(),
            RenderOptions {
                escape_html,
                ..RenderOptions::default()
            },
        )
    }

    fn select_all(html: &str, selector: &str) -> Vec<String> {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse(selector).unwrap();
        doc.select(&sel)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    fn header_styles(html: &str) -> Vec<String> {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse("header.public-card__header").unwrap();
        doc.select(&sel)
            .filter_map(|el| el.value().attr("style").map(str::to_string))
            .collect()
    }

    fn hrefs(html: &str) -> Vec<String> {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse("a.link").unwrap();
        doc.select(&sel)
            .filter_map(|el| el.value().attr("href").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_detail_link() {
        let news = item(7, "Big News!", Some(""));
        assert_eq!(
            template(false).detail_link(&news),
            "https://example.com/app/nos-actualites/7/big_news"
        );
    }

    #[test]
    fn test_card_contents() {
        let html = template(false).render_card(&item(7, "Big News!", Some("")));
        assert_eq!(
            hrefs(&html),
            vec!["https://example.com/app/nos-actualites/7/big_news"]
        );
        assert_eq!(select_all(&html, ".public-card__title"), vec!["Big News!"]);
        assert_eq!(select_all(&html, ".public-card__content"), vec!["Hello"]);
        assert_eq!(
            select_all(&html, ".public-card__publish-at"),
            vec!["1/15/2024"]
        );
    }

    #[test]
    fn test_default_image_when_missing_or_empty() {
        let t = template(false);
        for news in [item(1, "A", None), item(1, "A", Some(""))] {
            let html = t.render_card(&news);
            assert!(html.contains("background-image: url('./news-default.jpg')"));
        }
    }

    #[test]
    fn test_given_image_verbatim() {
        let html =
            template(false).render_card(&item(1, "A", Some("https://cdn.example.com/x.jpg?w=300")));
        assert!(html.contains("background-image: url('https://cdn.example.com/x.jpg?w=300')"));
        assert!(!html.contains("news-default.jpg"));
    }

    #[test]
    fn test_custom_default_image() {
        let t = CardTemplate::new(
            BaseUrl::parse("https://example.com").unwrap(),
            RenderOptions {
                default_image: "./styles/news-default.jpg".to_string(),
                ..RenderOptions::default()
            },
        );
        assert!(t.render_card(&item(1, "A", None)).contains("url('./styles/news-default.jpg')"));
    }

    #[test]
    fn test_empty_list_is_empty_container() {
        let html = template(false).render_list(&[]);
        assert_eq!(html, r#"<div class="news-widget-container"></div>"#);
        assert!(select_all(&html, ".wrapper").is_empty());
    }

    #[test]
    fn test_list_preserves_order() {
        let items = vec![
            item(3, "Charlie", None),
            item(1, "Alpha", None),
            item(2, "Bravo", None),
        ];
        let html = template(false).render_list(&items);
        assert_eq!(
            select_all(&html, ".news-widget-container .public-card__title"),
            vec!["Charlie", "Alpha", "Bravo"]
        );
        assert_eq!(
            hrefs(&html),
            vec![
                "https://example.com/app/nos-actualites/3/charlie",
                "https://example.com/app/nos-actualites/1/alpha",
                "https://example.com/app/nos-actualites/2/bravo",
            ]
        );
    }

    #[test]
    fn test_markup_is_trusted_by_default() {
        let mut news = item(1, "<b>Bold</b>", None);
        news.message = Some("<p>Body</p>".to_string());
        let html = template(false).render_card(&news);
        assert!(html.contains("<b>Bold</b>"));
        assert!(html.contains("<p>Body</p>"));
    }

    #[test]
    fn test_escape_html_option() {
        let mut news = item(1, "<script>alert(1)</script>", Some("x') ; background: red; ('"));
        news.message = Some("Tom & Jerry <3".to_string());
        let html = template(true).render_card(&news);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry &lt;3"));
    }

    #[test]
    fn test_escaped_image_stays_inside_css_url() {
        let news = item(1, "A", Some("x') ; background: red; ('"));
        let styles = header_styles(&template(true).render_card(&news));
        assert_eq!(
            styles,
            vec!["background-image: url('x%27%29%20;%20background:%20red;%20%28%27')"]
        );
        assert_eq!(styles[0].matches('\'').count(), 2);

        let news = item(1, "A", Some(r#"a.jpg" onmouseover="alert(1)"#));
        let styles = header_styles(&template(true).render_card(&news));
        assert_eq!(
            styles,
            vec!["background-image: url('a.jpg%22%20onmouseover=%22alert%281%29')"]
        );
    }

    #[test]
    fn test_escaped_plain_image_unchanged() {
        let news = item(1, "A", Some("https://cdn.example.com/x.jpg?w=300&h=200"));
        let html = template(true).render_card(&news);
        assert_eq!(
            header_styles(&html),
            vec!["background-image: url('https://cdn.example.com/x.jpg?w=300&h=200')"]
        );
        assert!(html.contains("x.jpg?w=300&amp;h=200"));
    }

    #[test]
    fn test_missing_publish_date_still_renders_card() {
        let mut news = item(5, "Undated", None);
        news.publish_at = None;
        let html = template(false).render_card(&news);
        assert_eq!(
            select_all(&html, ".public-card__publish-at"),
            vec![crate::dates::INVALID_DATE]
        );
        assert_eq!(select_all(&html, ".public-card__title"), vec!["Undated"]);
    }
}
