//! Data model for the pipeline.
//!
//! Each stage owns and fully replaces its input: raw rows become
//! [`PersonRecord`]s, the week filter produces [`MatchedRecord`]s and the
//! content enricher produces [`EnrichedRecord`]s. Nothing is mutated after
//! its producing stage returns.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// A possibly yearless recurring date, as read from a birthday cell.
///
/// Day and month pass basic range checks at parse time; whether the day
/// exists in a particular year is the celebration resolver's concern
/// (February 29 is the one case where it may not).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredDate {
    /// Month, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// Birth year, when the source notation carried one
    pub year: Option<i32>,
    /// The original cell text, kept for diagnostics
    pub raw: String,
}

impl StructuredDate {
    /// True for February 29 sources, which need the non-leap-year fallback
    #[must_use]
    pub fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }
}

/// One person parsed from a single input row
#[derive(Debug, Clone)]
pub struct PersonRecord {
    /// Full name (from the name column, or first + last name joined)
    pub name: String,
    /// First name, may be empty
    pub first_name: String,
    /// Last name, may be empty
    pub last_name: String,
    /// Recurring birthday
    pub birthday: StructuredDate,
    /// Raw quote/verse text, may be empty
    pub bible_verse: String,
    /// Raw greeting text, may be empty
    pub greeting: String,
    /// Assembled postal address, one line per element, deduplicated
    pub address_lines: Vec<String>,
    /// 1-based sheet row number, for diagnostics (header row is 1)
    pub row_number: usize,
}

/// A person whose birthday falls inside the active week window
#[derive(Debug, Clone)]
pub struct MatchedRecord {
    /// The underlying person record
    pub person: PersonRecord,
    /// Concrete calendar date the birthday is celebrated on
    pub celebration_date: NaiveDate,
}

/// A matched record with resolved verse and greeting text
#[derive(Debug, Clone)]
pub struct EnrichedRecord {
    /// The underlying matched record
    pub matched: MatchedRecord,
    /// Resolved verse text, never empty
    pub bible_verse: String,
    /// Resolved greeting text, never empty
    pub greeting: String,
}

impl EnrichedRecord {
    /// The underlying person record
    #[must_use]
    pub fn person(&self) -> &PersonRecord {
        &self.matched.person
    }

    /// The concrete celebration date
    #[must_use]
    pub fn celebration_date(&self) -> NaiveDate {
        self.matched.celebration_date
    }
}

/// The inclusive Monday-through-Sunday span used as the matching horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    /// First day of the week (Monday)
    pub start: NaiveDate,
    /// Last day of the week (Sunday)
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The week containing `day`
    #[must_use]
    pub fn containing(day: NaiveDate) -> Self {
        let start = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// The current week in the given timezone
    #[must_use]
    pub fn current(timezone: Tz) -> Self {
        Self::containing(Utc::now().with_timezone(&timezone).date_naive())
    }

    /// Whether `date` lies inside the window, both bounds inclusive
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
