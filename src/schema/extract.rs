//! Address block assembly.

use itertools::Itertools;

use super::aliases::{simplify, Field};
use super::field_map::FieldMap;

/// Assemble the final address block for one row.
///
/// Raw multi-line address values are split into trimmed lines; the
/// standalone street line is appended only when no existing line
/// normalizes to the same text; postal code and city are combined into
/// one line; the country comes last. The result is deduplicated in order,
/// and any line that normalizes to the record's full name is dropped
/// (the name occasionally leaks into an address column).
#[must_use]
pub fn collect_address_lines(row: &[String], map: &FieldMap) -> Vec<String> {
    let mut full_name = map.value(row, Field::Name);
    if full_name.is_empty() {
        full_name = [
            map.value(row, Field::FirstName),
            map.value(row, Field::LastName),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .join(" ");
    }

    let mut lines: Vec<String> = Vec::new();

    let address = map.value(row, Field::Address);
    for line in address.lines() {
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    let street = map.value(row, Field::Street);
    if !street.is_empty() && !lines.iter().any(|line| simplify(line) == simplify(&street)) {
        lines.push(street);
    }

    let city_line = [
        map.value(row, Field::PostalCode),
        map.value(row, Field::City),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .join(" ");
    if !city_line.is_empty() {
        lines.push(city_line);
    }

    let country = map.value(row, Field::Country);
    if !country.is_empty() {
        lines.push(country);
    }

    let name_key = simplify(&full_name);
    lines
        .into_iter()
        .unique()
        .filter(|line| name_key.is_empty() || simplify(line) != name_key)
        .collect()
}
