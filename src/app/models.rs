//! Data models for CSV record processing
//!
//! This module contains the record type produced from each CSV data row and
//! the column identifiers used in diagnostics.

use crate::constants::columns;
use serde::Serialize;
use std::fmt;

// =============================================================================
// Record Field Identifiers
// =============================================================================

/// Required record columns, in header lookup order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    Name,
    Age,
    Email,
}

impl RecordField {
    /// All required columns in the order they are checked against the header
    pub const ALL: [RecordField; 4] = [Self::Id, Self::Name, Self::Age, Self::Email];

    /// Header name of the column
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::Id => columns::ID,
            Self::Name => columns::NAME,
            Self::Age => columns::AGE,
            Self::Email => columns::EMAIL,
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// =============================================================================
// Record Structure
// =============================================================================

/// A validated person record parsed from one CSV data row
///
/// Fields are private so that every value in circulation has passed
/// [`Record::new`]: `id > 0`, `age > 0`, and non-empty `name` and `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: i32,
    name: String,
    age: i32,
    email: String,
}

impl Record {
    /// Create a new record with validation
    ///
    /// Checks run in a fixed order (name, email, id, age) and the first
    /// failing field is returned as the error.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        age: i32,
        email: impl Into<String>,
    ) -> std::result::Result<Self, RecordField> {
        let name = name.into();
        let email = email.into();

        if name.is_empty() {
            return Err(RecordField::Name);
        }
        if email.is_empty() {
            return Err(RecordField::Email);
        }
        if id <= 0 {
            return Err(RecordField::Id);
        }
        if age <= 0 {
            return Err(RecordField::Age);
        }

        Ok(Self {
            id,
            name,
            age,
            email,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
