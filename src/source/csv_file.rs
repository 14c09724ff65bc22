//! Local CSV row source.

use std::path::Path;

use crate::error::Result;

/// Read all rows from a CSV file.
///
/// The header row is passed through untouched; interpreting it is the
/// header mapper's job. Records may have varying lengths.
pub fn read(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
