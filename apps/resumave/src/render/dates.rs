//! Date formatting collaborator.
//!
//! The renderers never interpret dates themselves; they hand the raw string to a
//! `DateFormatter`. `MonthYearFormatter` is the default backend.

use chrono::NaiveDate;

/// Label for an experience entry without an end date.
pub const PRESENT: &str = "Present";

/// Turns a raw date string from the editor into display text.
pub trait DateFormatter: Send + Sync {
    fn format(&self, raw: &str) -> String;
}

/// `2021-03-15` and `2021-03` become `Mar 2021`. Anything else is shown as typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthYearFormatter;

impl DateFormatter for MonthYearFormatter {
    fn format(&self, raw: &str) -> String {
        let raw = raw.trim();
        parse_date(raw)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .ok()
}

/// Formats a `start - end` range, dropping whichever side is blank.
///
/// `end: None` (or blank) prints `open_end` when one is given, e.g. `Present`.
pub fn format_range(
    formatter: &dyn DateFormatter,
    start: &str,
    end: Option<&str>,
    open_end: Option<&str>,
) -> Option<String> {
    let start = formatter.format(start);
    let end = match end.map(str::trim).filter(|e| !e.is_empty()) {
        Some(end) => formatter.format(end),
        None => open_end.unwrap_or_default().to_string(),
    };

    match (start.is_empty(), end.is_empty()) {
        (true, true) => None,
        (false, true) => Some(start),
        (true, false) => Some(end),
        (false, false) => Some(format!("{start} - {end}")),
    }
}
