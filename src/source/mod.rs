//! Row acquisition.
//!
//! The pipeline itself is source-agnostic; it consumes a batch of string
//! rows. The two sources here form a closed set selected by configuration,
//! so dispatch is a plain match rather than a boxed trait object.

mod csv_file;
mod sheets;

use crate::config::{AppConfig, SourceConfig};
use crate::error::Result;

/// Fetch the raw rows for one pipeline run
pub async fn fetch_rows(config: &AppConfig) -> Result<Vec<Vec<String>>> {
    match &config.source {
        SourceConfig::Sheets {
            spreadsheet_id,
            range,
            api_key,
        } => sheets::fetch(spreadsheet_id, range, api_key).await,
        SourceConfig::Csv { path } => csv_file::read(path),
    }
}
