//! Header analysis for record CSV files
//!
//! Resolves the required columns by name, ignoring case and column order.

use crate::app::models::RecordField;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column positions resolved from a header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    id: usize,
    name: usize,
    age: usize,
    email: usize,

    /// Number of columns in the header, including ignored ones
    column_count: usize,
}

impl ColumnMapping {
    /// Analyze a header row and locate every required column
    ///
    /// Names are trimmed and compared case-insensitively; the first occurrence
    /// wins on duplicates.
    ///
    /// # Errors
    /// * Returns `Error::MissingColumn` naming the first required column
    ///   (in id, name, age, email order) absent from the header
    pub fn analyze(headers: &StringRecord, file: &str) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            name_to_index
                .entry(header.trim().to_lowercase())
                .or_insert(index);
        }

        let locate = |field: RecordField| -> Result<usize> {
            name_to_index
                .get(field.column_name())
                .copied()
                .ok_or_else(|| Error::missing_column(file, field))
        };

        Ok(Self {
            id: locate(RecordField::Id)?,
            name: locate(RecordField::Name)?,
            age: locate(RecordField::Age)?,
            email: locate(RecordField::Email)?,
            column_count: headers.len(),
        })
    }

    /// Index of a required column
    pub fn index(&self, field: RecordField) -> usize {
        match field {
            RecordField::Id => self.id,
            RecordField::Name => self.name,
            RecordField::Age => self.age,
            RecordField::Email => self.email,
        }
    }

    /// Number of columns in the header
    pub fn column_count(&self) -> usize {
        self.column_count
    }
}
