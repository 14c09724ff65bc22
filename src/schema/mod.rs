//! Header mapping and field extraction.
//!
//! A header row is mapped once per batch to a [`FieldMap`] using alias
//! tables and text normalization; all per-row reads go through the map.

mod aliases;
mod extract;
mod field_map;

pub use aliases::{simplify, Field};
pub use extract::collect_address_lines;
pub use field_map::FieldMap;
