//! Core record parser implementation
//!
//! This module handles the file-level checks, CSV reader configuration and
//! the row loop that builds the record list.

use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::column_mapping::ColumnMapping;
use super::field_parsers::parse_record;
use crate::app::adapters::filesystem::{FileSystem, LocalFileSystem};
use crate::app::models::Record;
use crate::constants::CSV_DELIMITER;
use crate::{Error, Result};

/// Parser turning a person CSV file into validated records
///
/// Each call to [`RecordParser::parse`] opens its own file handle and keeps
/// no state afterwards, so a parser can be shared freely between requests.
#[derive(Debug, Clone)]
pub struct RecordParser {
    file_system: Arc<dyn FileSystem>,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new(Arc::new(LocalFileSystem))
    }
}

impl RecordParser {
    /// Create a new parser reading through the given filesystem
    pub fn new(file_system: Arc<dyn FileSystem>) -> Self {
        Self { file_system }
    }

    /// Parse a CSV file into records, in file row order
    ///
    /// The first row is the header. Any invalid row aborts the whole parse.
    ///
    /// # Errors
    /// * `Error::FileNotFound` if nothing exists at `path`
    /// * `Error::FileEmpty` if the file has zero bytes
    /// * `Error::MissingColumn` if the header lacks id, name, age or email
    /// * `Error::MalformedNumber` if id or age is not a base-10 integer
    /// * `Error::InvalidField` if a converted row fails validation
    /// * `Error::CsvParsing` for structurally broken CSV
    /// * `Error::Io` for other filesystem failures
    pub fn parse(&self, path: &Path) -> Result<Vec<Record>> {
        let file_name = path.display().to_string();
        debug!("Attempting to parse CSV file: {}", file_name);

        self.validate_file(path, &file_name)?;

        let reader = self.file_system.open(path).map_err(|e| {
            error!("Failed to open CSV file {}: {}", file_name, e);
            if e.kind() == io::ErrorKind::NotFound {
                Error::file_not_found(&file_name)
            } else {
                Error::io(format!("Failed to open file {}", file_name), e)
            }
        })?;
        info!("CSV file opened successfully: {}", file_name);

        // The reader owns the handle; it is closed when this scope exits.
        let records = Self::parse_records(reader, &file_name)?;

        info!(
            "Successfully parsed {} records from CSV file: {}",
            records.len(),
            file_name
        );
        Ok(records)
    }

    /// Check that the file exists and is not empty
    fn validate_file(&self, path: &Path, file_name: &str) -> Result<()> {
        let size = self.file_system.file_size(path).map_err(|e| {
            error!("Failed to read metadata for {}: {}", file_name, e);
            Error::io(format!("Failed to read metadata for {}", file_name), e)
        })?;

        match size {
            None => {
                error!("File not found: {}", file_name);
                Err(Error::file_not_found(file_name))
            }
            Some(0) => {
                error!("File is empty: {}", file_name);
                Err(Error::file_empty(file_name))
            }
            Some(bytes) => {
                debug!("CSV file {} is {} bytes", file_name, bytes);
                Ok(())
            }
        }
    }

    /// Read the header and convert every data row
    fn parse_records(reader: Box<dyn Read + Send>, file_name: &str) -> Result<Vec<Record>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(CSV_DELIMITER)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(|e| {
            error!("Failed to read CSV headers from {}: {}", file_name, e);
            let message = format!("Failed to read CSV headers: {}", e);
            Error::csv_parsing(file_name, message, Some(e))
        })?;

        let mapping = ColumnMapping::analyze(headers, file_name).inspect_err(|e| {
            error!("{}", e);
        })?;
        debug!("Column mapping: {} columns in header", mapping.column_count());

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| {
                error!("Error parsing CSV file {}: {}", file_name, e);
                let message = format!("Malformed CSV row: {}", e);
                Error::csv_parsing(file_name, message, Some(e))
            })?;

            records.push(parse_record(&record, &mapping)?);
        }

        Ok(records)
    }
}
