//! Data access service over the record parser
//!
//! This module exposes the single query operation used by the HTTP layer:
//! parse the configured CSV file and optionally truncate the result.

use crate::Result;
use crate::app::models::Record;
use crate::app::services::record_parser::RecordParser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};


/// Facade returning records from a fixed CSV file
///
/// The file is re-read on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct DataService {
    parser: RecordParser,
    csv_path: PathBuf,
}

impl DataService {
    /// Create a new service reading `csv_path` through `parser`
    pub fn new(parser: RecordParser, csv_path: impl Into<PathBuf>) -> Self {
        Self {
            parser,
            csv_path: csv_path.into(),
        }
    }

    /// Path of the CSV file this service reads
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Get records from the CSV file, optionally limited to the first `limit`
    ///
    /// An absent, zero or negative limit returns every record. A limit larger
    /// than the record count returns every record. Parser errors are returned
    /// unchanged.
    pub fn query(&self, limit: Option<i64>) -> Result<Vec<Record>> {
        debug!("Retrieving data with limit: {:?}", limit);

        let start_time = Instant::now();
        let mut records = self.parser.parse(&self.csv_path)?;
        info!(
            "Retrieved {} records in {}ms",
            records.len(),
            start_time.elapsed().as_millis()
        );

        match limit.and_then(|l| usize::try_from(l).ok()).filter(|&l| l > 0) {
            Some(limit) => {
                let total = records.len();
                records.truncate(limit);
                debug!(
                    "Returning {} of {} total records (limit={})",
                    records.len(),
                    total,
                    limit
                );
            }
            None => {
                debug!(
                    "Returning all {} records (no valid limit specified)",
                    records.len()
                );
            }
        }

        Ok(records)
    }
}
