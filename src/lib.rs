//! Weekly birthday document generation.
//!
//! Maps loosely structured tabular rows (columns identified by fuzzy header
//! aliases) to person records, resolves which recurring birthdays fall inside
//! the current calendar week and renders the matches into two paginated PDF
//! documents: one envelope per person and a flowing two-column greeting sheet.

pub mod config;
pub mod enrich;
pub mod error;
pub mod matching;
pub mod models;
pub mod parse;
pub mod render;
pub mod schema;
pub mod source;

// Re-export the most common types for easier use
// Core types
pub use config::{AppConfig, SourceConfig};
pub use error::{Error, Result};
pub use models::{EnrichedRecord, MatchedRecord, PersonRecord, StructuredDate, WeekWindow};

// Pipeline stages
pub use enrich::enrich_records;
pub use matching::{match_week, resolve_celebration_date};
pub use parse::{parse_batch, parse_birthday};
pub use schema::{collect_address_lines, simplify, Field, FieldMap};

// Rendering
pub use render::{
    mm_to_pt, render_envelopes, render_greetings, Canvas, FontFace, PageGeometry, PdfCanvas,
    TextStyle,
};
