//! Application constants for the CSV data API
//!
//! This module contains configuration defaults, environment variable names,
//! and column names used throughout the application.

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default CSV file path, relative to the working directory
pub const DEFAULT_CSV_PATH: &str = "data/data.csv";

/// Default HTTP bind address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Environment variable overriding the CSV file path
pub const ENV_CSV_PATH: &str = "CSV_API_FILE_PATH";

/// Environment variable overriding the HTTP bind address
pub const ENV_BIND_ADDR: &str = "CSV_API_BIND_ADDR";

/// Crate name used as the default tracing filter target
pub const LOG_TARGET: &str = "csv_data_api";

// =============================================================================
// CSV Column Names
// =============================================================================

/// Header names of the required record columns (matched case-insensitively)
pub mod columns {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const AGE: &str = "age";
    pub const EMAIL: &str = "email";
}

/// CSV field delimiter
pub const CSV_DELIMITER: u8 = b',';

// =============================================================================
// HTTP Routes and Messages
// =============================================================================

/// Route prefix for the data API
pub const API_PREFIX: &str = "/api";

/// Data query route, nested under [`API_PREFIX`]
pub const DATA_ROUTE: &str = "/data";

/// Liveness route
pub const HEALTH_ROUTE: &str = "/health";

/// Body returned when the limit parameter is not positive
pub const INVALID_LIMIT_MESSAGE: &str = "Limit must be a positive integer";

/// Prefix of the body returned when the data source cannot be read
pub const READ_ERROR_PREFIX: &str = "Error reading CSV file: ";
