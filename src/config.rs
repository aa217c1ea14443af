//! Configuration management and validation.
//!
//! Holds the resolved runtime settings: which CSV file to serve and where to
//! listen. Values come from CLI arguments, which fall back to environment
//! variables and then to the defaults in [`crate::constants`].

use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_CSV_PATH};
use crate::{Error, Result};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Resolved configuration for the CSV data API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// CSV file read on every request
    pub csv_path: PathBuf,

    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Build a configuration from raw values, validating them
    pub fn new(csv_path: impl Into<PathBuf>, bind_addr: &str) -> Result<Self> {
        let bind_addr = parse_bind_addr(bind_addr)?;
        let config = Self {
            csv_path: csv_path.into(),
            bind_addr,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// A CSV file that does not exist yet is only a warning: the file is read
    /// per request and may be created after startup.
    pub fn validate(&self) -> Result<()> {
        if self.csv_path.as_os_str().is_empty() {
            return Err(Error::configuration("CSV file path cannot be empty"));
        }

        if !self.csv_path.exists() {
            warn!(
                "CSV file does not exist yet: {} (requests will fail until it is created)",
                self.csv_path.display()
            );
        }

        debug!(
            "Configuration validated: csv_path={}, bind_addr={}",
            self.csv_path.display(),
            self.bind_addr
        );
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

/// Parse a `host:port` bind address
pub fn parse_bind_addr(value: &str) -> Result<SocketAddr> {
    value.trim().parse().map_err(|e| {
        Error::configuration(format!(
            "Invalid bind address '{}': {} (expected host:port, e.g. {})",
            value, e, DEFAULT_BIND_ADDR
        ))
    })
}
