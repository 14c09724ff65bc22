//! Process configuration.
//!
//! All configuration is read once at startup from environment variables
//! (with `.env` support in the binary). Missing required values are fatal
//! precondition failures; no partial output is produced.

use std::env;
use std::path::PathBuf;

use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Where the raw rows come from
#[derive(Debug, Clone)]
pub enum SourceConfig {
    /// Google Sheets values endpoint, read-only, authenticated by API key
    Sheets {
        /// Spreadsheet identifier from the sheet URL
        spreadsheet_id: String,
        /// A1-notation range, e.g. `Sheet1!A:Z`
        range: String,
        /// API key with read access to the sheet
        api_key: String,
    },
    /// Local CSV file (no header interpretation; the header mapper owns that)
    Csv {
        /// Path to the CSV file
        path: PathBuf,
    },
}

impl SourceConfig {
    /// Short human-readable description for log output
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Sheets {
                spreadsheet_id,
                range,
                ..
            } => format!("spreadsheet {spreadsheet_id} ({range})"),
            Self::Csv { path } => format!("CSV file {}", path.display()),
        }
    }
}

/// Configuration for one pipeline run
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Timezone used to determine "now" and the active week window
    pub timezone: Tz,
    /// Directory the finished documents are written to
    pub output_dir: PathBuf,
    /// Row source coordinates
    pub source: SourceConfig,
}

impl AppConfig {
    /// Read the configuration from the environment.
    ///
    /// `INPUT_CSV` switches the source to a local file; otherwise
    /// `GOOGLE_SHEETS_ID` and `GOOGLE_API_KEY` are required.
    pub fn from_env() -> Result<Self> {
        let timezone_name =
            env::var("TIMEZONE").unwrap_or_else(|_| String::from("Europe/Zurich"));
        let timezone: Tz = timezone_name
            .parse()
            .map_err(|_| Error::Config(format!("Unknown timezone: {timezone_name}")))?;

        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("output"));

        let source = if let Ok(path) = env::var("INPUT_CSV") {
            SourceConfig::Csv {
                path: PathBuf::from(path),
            }
        } else {
            let spreadsheet_id = env::var("GOOGLE_SHEETS_ID").map_err(|_| {
                Error::Config(String::from(
                    "GOOGLE_SHEETS_ID is not set (and INPUT_CSV is not set either)",
                ))
            })?;
            let api_key = env::var("GOOGLE_API_KEY")
                .map_err(|_| Error::Config(String::from("GOOGLE_API_KEY is not set")))?;
            let range =
                env::var("GOOGLE_SHEETS_RANGE").unwrap_or_else(|_| String::from("Sheet1!A:Z"));
            SourceConfig::Sheets {
                spreadsheet_id,
                range,
                api_key,
            }
        };

        Ok(Self {
            timezone,
            output_dir,
            source,
        })
    }
}
