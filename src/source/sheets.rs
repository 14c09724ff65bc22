//! Google Sheets values endpoint, read-only, API-key authenticated.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Fetch the raw cell values for a spreadsheet range.
///
/// A sheet without data rows comes back without a `values` member; that
/// is an empty batch, not an error. Transport and HTTP-status failures
/// propagate as fatal.
pub async fn fetch(spreadsheet_id: &str, range: &str, api_key: &str) -> Result<Vec<Vec<String>>> {
    let url = format!("https://sheets.googleapis.com/v4/spreadsheets/{spreadsheet_id}/values/{range}");
    let response = reqwest::Client::new()
        .get(&url)
        .query(&[("key", api_key), ("valueRenderOption", "FORMATTED_VALUE")])
        .send()
        .await?
        .error_for_status()?;
    let body: ValueRange = response.json().await?;
    Ok(body
        .values
        .into_iter()
        .map(|row| row.into_iter().map(cell_to_string).collect())
        .collect())
}

/// Formatted values are strings, but empty cells arrive as null and the
/// API may hand back bare numbers for unformatted ranges
fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
