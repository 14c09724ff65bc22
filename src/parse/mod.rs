//! Row parsing: free-form date interpretation and record construction.

mod date;
mod row;

pub use date::parse_birthday;
pub use row::{parse_batch, parse_row};
