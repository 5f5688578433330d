//! Presentation-only transformations of note fields.

use chrono::{DateTime, Local, Locale, TimeZone, Utc};
use std::fmt::Display;

/// Titles longer than this many characters are truncated in the list.
const TITLE_DISPLAY_MAX: usize = 33;

/// Number of characters kept when a title is truncated.
const TITLE_TRUNCATED_LEN: usize = 31;

/// List timestamp: day, abbreviated month, hour and minute.
pub const SHORT_FORMAT: &str = "%d %b, %H:%M";

/// Detail timestamp: the locale's full date and time representation.
pub const FULL_FORMAT: &str = "%c";

/// Shortens a title for the sidebar list.
///
/// Titles of more than 33 characters become their first 31 characters
/// followed by `…`. Characters are Unicode scalar values.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_DISPLAY_MAX {
        let head: String = title.chars().take(TITLE_TRUNCATED_LEN).collect();
        format!("{}…", head)
    } else {
        title.to_string()
    }
}

/// Formats a timestamp for the list in the local time zone.
pub fn format_short(ts: DateTime<Utc>, locale: Locale) -> String {
    format_short_in(ts, &Local, locale)
}

/// Formats a timestamp for the detail pane in the local time zone.
pub fn format_full(ts: DateTime<Utc>, locale: Locale) -> String {
    format_full_in(ts, &Local, locale)
}

/// Like [`format_short`] with an explicit time zone.
///
/// Runs of whitespace collapse to one space, since some locales pad their
/// abbreviated month names.
pub fn format_short_in<Tz>(ts: DateTime<Utc>, tz: &Tz, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let shown = ts
        .with_timezone(tz)
        .format_localized(SHORT_FORMAT, locale)
        .to_string();
    shown.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Like [`format_full`] with an explicit time zone.
pub fn format_full_in<Tz>(ts: DateTime<Utc>, tz: &Tz, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz)
        .format_localized(FULL_FORMAT, locale)
        .to_string()
}

/// Parses a locale name such as `de_DE`, `en-US` or `fr_FR.UTF-8@euro`.
///
/// `C` and `POSIX` map to the POSIX locale. Returns `None` for names chrono
/// does not know.
pub fn parse_locale(name: &str) -> Option<Locale> {
    let base = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('-', "_");

    match base.as_str() {
        "" => None,
        "C" | "POSIX" => Some(Locale::POSIX),
        other => Locale::try_from(other).ok(),
    }
}
