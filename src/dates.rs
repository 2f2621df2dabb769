//! Publish-date interpretation and locale-aware calendar formatting.
//!
//! The backend sends `publish_at` either as text (RFC 3339, a naive
//! date-time, or a bare date) or as epoch milliseconds. Cards show only the
//! calendar date, in the viewer's UTC offset, using the date order and
//! separator conventional for the viewer's locale.

use crate::models::PublishAt;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

/// Text shown in place of a date that cannot be interpreted.
pub const INVALID_DATE: &str = "Invalid Date";

/// Calendar layout for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `1/15/2024`
    #[default]
    MonthDayYear,
    /// `15/01/2024`
    DayMonthYearSlash,
    /// `15.01.2024`
    DayMonthYearDot,
    /// `2024-01-15`
    YearMonthDay,
    /// `2024/1/15`
    YearMonthDaySlash,
    /// `2024. 1. 15.`
    YearMonthDayDotted,
    /// `15-1-2024`
    DayMonthYearDash,
}

impl DateStyle {
    /// Pick a style from a locale tag such as `fr-FR`, `en_GB` or `de_DE.UTF-8`.
    ///
    /// Unknown tags fall back to [`DateStyle::MonthDayYear`].
    pub fn from_locale(tag: &str) -> Self {
        let tag = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-")
            .to_ascii_lowercase();
        let lang = tag.split('-').next().unwrap_or_default();

        let style = match (lang, tag.as_str()) {
            (_, "en-us") | ("en", "en") => DateStyle::MonthDayYear,
            (_, "en-ca" | "fr-ca") => DateStyle::YearMonthDay,
            ("en", _) | ("fr" | "es" | "it" | "pt" | "el", _) => DateStyle::DayMonthYearSlash,
            ("de" | "ru" | "pl" | "cs" | "fi" | "nb" | "tr" | "uk", _) => {
                DateStyle::DayMonthYearDot
            }
            ("nl", _) => DateStyle::DayMonthYearDash,
            ("ja" | "zh", _) => DateStyle::YearMonthDaySlash,
            ("ko", _) => DateStyle::YearMonthDayDotted,
            ("sv" | "lt" | "iso", _) => DateStyle::YearMonthDay,
            _ => DateStyle::MonthDayYear,
        };
        debug!(%tag, ?style, "Resolved date style");
        style
    }

    pub fn format(self, date: NaiveDate) -> String {
        match self {
            DateStyle::MonthDayYear => date.format("%-m/%-d/%Y").to_string(),
            DateStyle::DayMonthYearSlash => date.format("%d/%m/%Y").to_string(),
            DateStyle::DayMonthYearDot => date.format("%d.%m.%Y").to_string(),
            DateStyle::YearMonthDay => date.format("%Y-%m-%d").to_string(),
            DateStyle::YearMonthDaySlash => date.format("%Y/%-m/%-d").to_string(),
            DateStyle::YearMonthDayDotted => date.format("%Y. %-m. %-d.").to_string(),
            DateStyle::DayMonthYearDash => date.format("%-d-%-m-%Y").to_string(),
        }
    }
}

/// Resolve a [`PublishAt`] to an instant.
///
/// Naive date-times are taken as wall-clock time in `offset`; bare dates as
/// UTC midnight. Returns `None` when nothing matches.
pub fn parse_publish_at(value: &PublishAt, offset: FixedOffset) -> Option<DateTime<Utc>> {
    match value {
        PublishAt::EpochMillis(ms) => DateTime::from_timestamp_millis(*ms),
        PublishAt::FractionalMillis(ms) if ms.is_finite() => {
            DateTime::from_timestamp_millis(ms.trunc() as i64)
        }
        PublishAt::FractionalMillis(_) | PublishAt::Other(_) => None,
        PublishAt::Text(text) => {
            let text = text.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                return Some(dt.with_timezone(&Utc));
            }
            for fmt in [
                "%Y-%m-%dT%H:%M:%S",
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%dT%H:%M:%S%.f",
                "%Y-%m-%d %H:%M:%S%.f",
            ] {
                if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
                    return offset
                        .from_local_datetime(&naive)
                        .single()
                        .map(|dt| dt.with_timezone(&Utc));
                }
            }
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        }
    }
}

/// Format a publish timestamp as the viewer's calendar date.
///
/// A missing timestamp renders as [`INVALID_DATE`], like an unparseable one.
pub fn format_publish_date(
    value: Option<&PublishAt>,
    style: DateStyle,
    offset: FixedOffset,
) -> String {
    match value.and_then(|v| parse_publish_at(v, offset)) {
        Some(instant) => style.format(instant.with_timezone(&offset).date_naive()),
        None => {
            debug!(?value, "Unparseable publish_at");
            INVALID_DATE.to_string()
        }
    }
}
