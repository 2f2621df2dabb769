//! Small helpers: log truncation and the viewer's locale/offset.

use chrono::{FixedOffset, Local, Offset};
use tracing::debug;

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a character boundary)
/// with an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Locale tag of the current process, read from `LC_ALL`, `LC_TIME` then `LANG`.
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

/// UTC offset of the local timezone right now.
pub fn local_utc_offset() -> FixedOffset {
    let offset = Local::now().offset().fix();
    debug!(%offset, "Resolved local UTC offset");
    offset
}
