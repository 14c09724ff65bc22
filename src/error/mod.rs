//! Error handling for the birthday document pipeline.
//!
//! Record-level defects (missing name, unreadable birthday) are not errors;
//! they are logged and the row is skipped. Everything in this enum is fatal
//! and terminates the run before any further output is produced.

/// Errors that can abort a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid process configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Spreadsheet fetch failure
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// CSV input failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF assembly or write failure
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
