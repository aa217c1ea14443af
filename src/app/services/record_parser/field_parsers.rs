//! Field parsing utilities for record CSV rows
//!
//! This module extracts the required fields from a CSV row, converts the
//! numeric ones and builds a validated [`Record`].

use super::column_mapping::ColumnMapping;
use crate::app::models::{Record, RecordField};
use crate::{Error, Result};
use csv::StringRecord;
use tracing::{debug, warn};

/// Parse one data row into a validated record
///
/// Numeric conversion happens first (id, then age); validation follows in
/// the order name, email, id, age. The first failure is returned.
pub fn parse_record(record: &StringRecord, mapping: &ColumnMapping) -> Result<Record> {
    let line = line_number(record);

    let name = get_field(record, mapping, RecordField::Name);
    let email = get_field(record, mapping, RecordField::Email);
    let id = parse_required_i32(record, mapping, RecordField::Id)?;
    let age = parse_required_i32(record, mapping, RecordField::Age)?;

    let parsed = Record::new(id, name, age, email).map_err(|field| {
        warn!("Invalid {} in record at line {}: {:?}", field, line, record);
        Error::invalid_field(line, raw_row(record), field)
    })?;

    debug!("Parsed record: id={}, name={}, age={}", id, name, age);
    Ok(parsed)
}

/// Parse a required base-10 i32 column
pub fn parse_required_i32(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field: RecordField,
) -> Result<i32> {
    let value = get_field(record, mapping, field);

    value.parse::<i32>().map_err(|e| {
        let line = line_number(record);
        warn!(
            "Failed to parse numeric field {} ('{}') in record at line {}: {}",
            field, value, line, e
        );
        Error::malformed_number(line, raw_row(record), field)
    })
}

/// Get a trimmed field value, empty if the row is too short to hold it
///
/// An empty value then fails numeric parsing or validation for the row.
pub fn get_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field: RecordField,
) -> &'a str {
    record
        .get(mapping.index(field))
        .map(str::trim)
        .unwrap_or_default()
}

/// Raw row content for diagnostics: the row's fields joined by commas
pub fn raw_row(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}

/// 1-based line number where the row starts, 0 if unknown
pub fn line_number(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
