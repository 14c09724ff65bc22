//! Multi-format birthday parsing.
//!
//! Parsing order, first success wins: strict ISO, the explicit pattern
//! list below, spelled-month notations, and finally a generic
//! `day[./-]month[[./-]year]` regex fallback. Ambiguous numeric dates are
//! always read day-first. This is a fixed policy, not format detection:
//! data from month-first locales will be misparsed, and silently guessing
//! would be worse than documenting the convention.

use chrono::{Datelike, NaiveDate};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::models::StructuredDate;
use crate::schema::simplify;

struct DatePattern {
    format: &'static str,
    has_year: bool,
}

/// Explicit notations tried after ISO. Two-digit-year patterns precede
/// their four-digit siblings so that chrono's flexible `%Y` cannot read
/// "80" as the year 80.
const DATE_PATTERNS: &[DatePattern] = &[
    DatePattern { format: "%d.%m.%y", has_year: true },
    DatePattern { format: "%d.%m.%Y", has_year: true },
    DatePattern { format: "%d/%m/%y", has_year: true },
    DatePattern { format: "%d/%m/%Y", has_year: true },
    DatePattern { format: "%d-%m-%y", has_year: true },
    DatePattern { format: "%d-%m-%Y", has_year: true },
    DatePattern { format: "%d.%m.", has_year: false },
    DatePattern { format: "%d.%m", has_year: false },
    DatePattern { format: "%d/%m", has_year: false },
    DatePattern { format: "%d-%m", has_year: false },
];

/// Month names accepted in spelled notations (German and English, full
/// and abbreviated), keys pre-normalized
static MONTH_NAMES: Lazy<FxHashMap<&'static str, u32>> = Lazy::new(|| {
    [
        ("januar", 1), ("january", 1), ("jan", 1),
        ("februar", 2), ("february", 2), ("feb", 2),
        ("marz", 3), ("maerz", 3), ("march", 3), ("mar", 3), ("mrz", 3),
        ("april", 4), ("apr", 4),
        ("mai", 5), ("may", 5),
        ("juni", 6), ("june", 6), ("jun", 6),
        ("juli", 7), ("july", 7), ("jul", 7),
        ("august", 8), ("aug", 8),
        ("september", 9), ("sept", 9), ("sep", 9),
        ("oktober", 10), ("october", 10), ("okt", 10), ("oct", 10),
        ("november", 11), ("nov", 11),
        ("dezember", 12), ("december", 12), ("dez", 12), ("dec", 12),
    ]
    .into_iter()
    .collect()
});

static SPELLED_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\.?\s*(\p{Alphabetic}+)\.?(?:\s+(\d{4}))?$").unwrap());

static NUMERIC_FALLBACK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[./-](\d{1,2})(?:[./-](\d{2,4}))?$").unwrap());

/// Parse a free-form birthday cell into a [`StructuredDate`].
///
/// Never fails hard: unparsable input is logged with the row number and
/// offending text and yields `None`, and the caller skips the record.
#[must_use]
pub fn parse_birthday(raw: &str, row_number: usize, name: &str) -> Option<StructuredDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(structured(date.month(), date.day(), Some(date.year()), trimmed));
    }

    for pattern in DATE_PATTERNS {
        if let Some((month, day, year)) = try_pattern(trimmed, pattern) {
            return Some(structured(month, day, year, trimmed));
        }
    }

    if let Some((month, day, year)) = parse_spelled_month(trimmed) {
        return Some(structured(month, day, year, trimmed));
    }

    if let Some(captures) = NUMERIC_FALLBACK.captures(trimmed) {
        let day: u32 = captures[1].parse().ok()?;
        let month: u32 = captures[2].parse().ok()?;
        let year = captures.get(3).and_then(|m| expand_year(m.as_str()));
        if (1..=31).contains(&day) && (1..=12).contains(&month) {
            return Some(structured(month, day, year, trimmed));
        }
    }

    warn!("Could not interpret birthday (row {row_number}, {name}): \"{trimmed}\"");
    None
}

fn structured(month: u32, day: u32, year: Option<i32>, raw: &str) -> StructuredDate {
    StructuredDate {
        month,
        day,
        year,
        raw: raw.to_string(),
    }
}

fn try_pattern(text: &str, pattern: &DatePattern) -> Option<(u32, u32, Option<i32>)> {
    if pattern.has_year {
        let date = NaiveDate::parse_from_str(text, pattern.format).ok()?;
        Some((date.month(), date.day(), Some(date.year())))
    } else {
        // Yearless patterns get a sentinel leap year appended so chrono can
        // instantiate them; the year is discarded afterwards.
        let padded = format!("{text} 2000");
        let format = format!("{} %Y", pattern.format);
        let date = NaiveDate::parse_from_str(&padded, &format).ok()?;
        Some((date.month(), date.day(), None))
    }
}

fn parse_spelled_month(text: &str) -> Option<(u32, u32, Option<i32>)> {
    let captures = SPELLED_MONTH.captures(text)?;
    let day: u32 = captures[1].parse().ok()?;
    let month = *MONTH_NAMES.get(simplify(&captures[2]).as_str())?;
    let year = captures.get(3).and_then(|m| m.as_str().parse::<i32>().ok());
    if (1..=31).contains(&day) {
        Some((month, day, year))
    } else {
        None
    }
}

/// Expand a 2-digit year by prefixing "20"; pass 3- and 4-digit years through
fn expand_year(text: &str) -> Option<i32> {
    if text.len() == 2 {
        format!("20{text}").parse().ok()
    } else {
        text.parse().ok()
    }
}
