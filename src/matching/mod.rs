//! Week-window matching of recurring dates.

use chrono::{Datelike, NaiveDate};
use itertools::Itertools;

use crate::models::{MatchedRecord, PersonRecord, StructuredDate, WeekWindow};
use crate::schema::simplify;

/// Find the concrete calendar date on which a recurring date falls inside
/// the window, if any.
///
/// Candidate years are tested in insertion order: the window's start year,
/// its end year (covers windows spanning a year boundary) and the date's
/// own year when known, duplicates collapsed. A February 29 source in a
/// non-leap candidate year is observed on February 28 of that year. No
/// candidate inside the window means the record is excluded, not an error.
#[must_use]
pub fn resolve_celebration_date(
    birthday: &StructuredDate,
    window: &WeekWindow,
) -> Option<NaiveDate> {
    let mut years = vec![window.start.year(), window.end.year()];
    if let Some(year) = birthday.year {
        years.push(year);
    }

    for year in years.into_iter().unique() {
        let candidate = NaiveDate::from_ymd_opt(year, birthday.month, birthday.day).or_else(|| {
            birthday
                .is_leap_day()
                .then(|| NaiveDate::from_ymd_opt(year, 2, 28))
                .flatten()
        });
        if let Some(date) = candidate {
            if window.contains(date) {
                return Some(date);
            }
        }
    }

    None
}

/// Filter a batch down to the records celebrating inside the window,
/// sorted ascending by celebration date with a case- and diacritic-folded
/// name comparison as tie-break.
#[must_use]
pub fn match_week(records: Vec<PersonRecord>, window: &WeekWindow) -> Vec<MatchedRecord> {
    let mut matches: Vec<MatchedRecord> = records
        .into_iter()
        .filter_map(|person| {
            resolve_celebration_date(&person.birthday, window).map(|celebration_date| {
                MatchedRecord {
                    person,
                    celebration_date,
                }
            })
        })
        .collect();
    matches.sort_by(|a, b| {
        a.celebration_date
            .cmp(&b.celebration_date)
            .then_with(|| simplify(&a.person.name).cmp(&simplify(&b.person.name)))
    });
    matches
}
