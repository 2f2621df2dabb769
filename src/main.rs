//! # News Widget
//!
//! Fetches the most recent public news items from a backend API and renders
//! them as a responsive grid of HTML cards, each linking to the item's detail
//! page on the same site.
//!
//! ## Usage
//!
//! ```sh
//! news_widget --base-url https://api.example.com -o public/news.html
//! ```
//!
//! ## Pipeline
//!
//! 1. **Configuration**: YAML file (optional) overlaid with CLI flags
//! 2. **Query**: `GET {base}/news?limit=4&offset=0&order_by=desc&sort_by=publish_at&is_public=true&target_id=`
//! 3. **Render**: each item becomes a card linking to `{base}/app/nos-actualites/{id}/{slug}`
//! 4. **Output**: stylesheet + card container, to stdout or a file
//!
//! A missing base URL or a failed fetch is logged and produces no output; the
//! process still exits successfully, like a widget that silently renders
//! nothing.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod client;
mod config;
mod dates;
mod error;
mod models;
mod outputs;
mod query;
mod render;
mod slug;
mod styles;
mod utils;
mod widget;

use cli::Cli;
use client::HttpNewsClient;
use config::WidgetConfig;
use outputs::html;
use utils::{local_utc_offset, system_locale};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr, so stdout stays clean markup) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_widget starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Configuration ----
    let file_config = match &args.config {
        Some(path) => WidgetConfig::load(path).await?,
        None => WidgetConfig::default(),
    };
    let config = file_config.merge(args.overrides());

    let locale = system_locale();
    let options = config.render_options(locale.as_deref(), local_utc_offset());
    debug!(?options, "Render options");

    // ---- Attach: fetch once and render ----
    let client = HttpNewsClient::new(config.identity());
    let Some(markup) = widget::attach(&config, options, client, !args.fragment_only).await else {
        info!(elapsed_ms = start_time.elapsed().as_millis() as u64, "Nothing rendered");
        return Ok(());
    };

    // ---- Output ----
    html::write_document(&markup, args.output.as_deref()).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
