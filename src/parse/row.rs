//! Row to record construction.

use itertools::Itertools;
use log::warn;

use crate::models::PersonRecord;
use crate::schema::{collect_address_lines, Field, FieldMap};

use super::date::parse_birthday;

/// Parse one data row into a [`PersonRecord`].
///
/// Rows without a resolvable name or a readable birthday are skipped with
/// a warning carrying the 1-based sheet row number.
#[must_use]
pub fn parse_row(row: &[String], map: &FieldMap, row_number: usize) -> Option<PersonRecord> {
    let first_name = map.value(row, Field::FirstName);
    let last_name = map.value(row, Field::LastName);
    let mut name = map.value(row, Field::Name);
    if name.is_empty() {
        name = [&first_name, &last_name]
            .iter()
            .filter(|part| !part.is_empty())
            .join(" ");
    }
    if name.is_empty() {
        warn!("Skipping row {row_number}: no name present");
        return None;
    }

    let birthday_raw = map.value(row, Field::Birthday);
    let Some(birthday) = parse_birthday(&birthday_raw, row_number, &name) else {
        warn!("Skipping row {row_number} ({name}): birthday could not be read");
        return None;
    };

    Some(PersonRecord {
        bible_verse: map.value(row, Field::BibleVerse),
        greeting: map.value(row, Field::Greeting),
        address_lines: collect_address_lines(row, map),
        name,
        first_name,
        last_name,
        birthday,
        row_number,
    })
}

/// Parse a whole batch: the first row is the header, data rows follow.
///
/// Sheet row numbers are 1-based, so the first data row is row 2.
#[must_use]
pub fn parse_batch(rows: &[Vec<String>]) -> Vec<PersonRecord> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };
    let map = FieldMap::from_header(header);
    if map.is_empty() {
        warn!("No recognizable header columns; all field reads will be empty");
    }
    data.iter()
        .enumerate()
        .filter_map(|(index, row)| parse_row(row, &map, index + 2))
        .collect()
}
