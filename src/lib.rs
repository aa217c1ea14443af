//! CSV Data API Library
//!
//! A small Rust service that reads person records from a CSV file and serves
//! them over HTTP as JSON.
//!
//! This library provides tools for:
//! - Parsing a CSV file with a case-insensitive header row into typed records
//! - Validating every record and failing fast on the first offending row
//! - Querying the parsed records with an optional result limit
//! - Exposing the query over an axum HTTP router
//! - Comprehensive error handling with per-field diagnostics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod data_service;
        pub mod record_parser;
    }
    pub mod adapters {
        pub mod filesystem;
        pub mod http;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Record, RecordField};
pub use app::services::data_service::DataService;
pub use app::services::record_parser::RecordParser;
pub use config::Config;

/// Result type alias for the CSV data API
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CSV loading, record validation and request handling
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// CSV file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// CSV file exists but has zero bytes
    #[error("File is empty: {path}")]
    FileEmpty { path: String },

    /// Header row lacks one of the required columns
    #[error("Missing required column '{column}' in header of file: {path}")]
    MissingColumn { path: String, column: RecordField },

    /// Numeric column could not be parsed as an integer
    #[error("Failed to parse numeric field '{field}' in record at line {line}: {row}")]
    MalformedNumber {
        line: u64,
        row: String,
        field: RecordField,
    },

    /// Field failed validation after conversion
    #[error("Invalid {field} in record at line {line}: {row}")]
    InvalidField {
        line: u64,
        row: String,
        field: RecordField,
    },

    /// CSV structure error reported by the decoder
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Requested limit is not a positive integer
    #[error("Limit must be a positive integer, got {limit}")]
    InvalidLimit { limit: i64 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a file empty error
    pub fn file_empty(path: impl Into<String>) -> Self {
        Self::FileEmpty { path: path.into() }
    }

    /// Create a missing column error
    pub fn missing_column(path: impl Into<String>, column: RecordField) -> Self {
        Self::MissingColumn {
            path: path.into(),
            column,
        }
    }

    /// Create a malformed number error for the given raw row
    pub fn malformed_number(line: u64, row: impl Into<String>, field: RecordField) -> Self {
        Self::MalformedNumber {
            line,
            row: row.into(),
            field,
        }
    }

    /// Create an invalid field error for the given raw row
    pub fn invalid_field(line: u64, row: impl Into<String>, field: RecordField) -> Self {
        Self::InvalidField {
            line,
            row: row.into(),
            field,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid limit error
    pub fn invalid_limit(limit: i64) -> Self {
        Self::InvalidLimit { limit }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller rather than the data source
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidLimit { .. })
    }
}

// Automatic conversion for I/O errors
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
