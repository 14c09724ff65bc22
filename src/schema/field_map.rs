//! Column-index resolution from a header row.

use rustc_hash::FxHashMap;

use super::aliases::{simplify, Field, ALIAS_LOOKUP};

/// Mapping from semantic field to column index, built once per batch.
///
/// Single-valued fields keep the first matching column; the address field
/// collects every matching column in header order. Unrecognized columns
/// are ignored, and a header with no recognizable cells yields an empty
/// map (all downstream reads return empty strings).
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    single: FxHashMap<Field, usize>,
    address: Vec<usize>,
}

impl FieldMap {
    /// Build the map from the header row
    #[must_use]
    pub fn from_header(header: &[String]) -> Self {
        let mut map = Self::default();
        for (index, cell) in header.iter().enumerate() {
            let key = simplify(cell);
            if key.is_empty() {
                continue;
            }
            let Some(&field) = ALIAS_LOOKUP.get(key.as_str()) else {
                continue;
            };
            if field == Field::Address {
                map.address.push(index);
            } else {
                map.single.entry(field).or_insert(index);
            }
        }
        map
    }

    /// Whether no column was recognized at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.address.is_empty()
    }

    /// Read a field's value from a row.
    ///
    /// Single-valued fields return the trimmed cell, or an empty string
    /// when the field is unmapped or the row is short. The address field
    /// joins all trimmed non-empty mapped cells with newlines.
    #[must_use]
    pub fn value(&self, row: &[String], field: Field) -> String {
        if field == Field::Address {
            return self
                .address
                .iter()
                .filter_map(|&index| row.get(index))
                .map(|cell| cell.trim())
                .filter(|cell| !cell.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
        }
        self.single
            .get(&field)
            .and_then(|&index| row.get(index))
            .map(|cell| cell.trim().to_string())
            .unwrap_or_default()
    }
}
