//! CSV record parser for person data files
//!
//! This module turns a CSV file into an ordered list of validated
//! [`Record`](crate::app::models::Record)s, or a single error describing the
//! first problem found. There is no partial-success mode.
//!
//! ## Architecture
//!
//! - [`parser`] - File checks, CSV reader setup and the row loop
//! - [`column_mapping`] - Case-insensitive header lookup for required columns
//! - [`field_parsers`] - Per-row field extraction, conversion and validation
//!
//! ## Usage
//!
//! ```rust
//! use csv_data_api::app::services::record_parser::RecordParser;
//!
//! # fn example() -> csv_data_api::Result<()> {
//! let parser = RecordParser::default();
//! let records = parser.parse(std::path::Path::new("data/data.csv"))?;
//!
//! println!("Parsed {} records", records.len());
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::RecordParser;
