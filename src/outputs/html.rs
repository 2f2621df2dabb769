//! HTML output.
//!
//! The markup is written as-is: a `<style>` element followed by the card
//! container (or the container alone with `--fragment-only`). When a path is
//! given, missing parent directories are created first.

use crate::error::WidgetError;
use std::path::Path;
use tokio::fs;
use tokio::io::{self, AsyncWriteExt};
use tracing::{error, info, instrument};

/// Write `markup` to `path`, or to stdout when `path` is `None`.
#[instrument(level = "info", skip_all, fields(path = ?path))]
pub async fn write_document(markup: &str, path: Option<&Path>) -> Result<(), WidgetError> {
    let Some(path) = path else {
        let mut stdout = io::stdout();
        stdout.write_all(markup.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(parent = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    fs::write(path, markup).await?;
    info!(path = %path.display(), bytes = markup.len(), "Wrote widget HTML");
    Ok(())
}
