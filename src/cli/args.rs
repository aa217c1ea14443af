//! Command-line argument definitions for the CSV data API
//!
//! This module defines the CLI interface using the clap derive API. Every
//! option can also be supplied through an environment variable.

use crate::Result;
use crate::config::Config;
use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_CSV_PATH, ENV_BIND_ADDR, ENV_CSV_PATH};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the CSV data API
///
/// Serves person records from a CSV file over HTTP, or checks that the file
/// parses cleanly.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv-data-api",
    version,
    about = "Serve validated person records from a CSV file as JSON",
    long_about = "Reads a CSV file with id, name, age and email columns on every request, \
                  validates each row and returns the records from GET /api/data as a JSON \
                  array. The optional limit query parameter truncates the result."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Parse the CSV file once and report the result
    Check(CheckArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Path to the CSV file
    ///
    /// The file is read fresh on every request. Must have a header row with
    /// id, name, age and email columns (any order, any case).
    #[arg(
        long = "csv-path",
        value_name = "PATH",
        env = ENV_CSV_PATH,
        default_value = DEFAULT_CSV_PATH,
        help = "Path to the CSV file"
    )]
    pub csv_path: PathBuf,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl CommonArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            verbose: 0,
            quiet: false,
        }
    }
}

/// Arguments for the serve command
#[derive(Debug, Clone, ClapArgs)]
pub struct ServeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Address to listen on
    #[arg(
        long = "bind",
        value_name = "ADDR",
        env = ENV_BIND_ADDR,
        default_value = DEFAULT_BIND_ADDR,
        help = "Address to listen on (host:port)"
    )]
    pub bind_addr: String,
}

impl ServeArgs {
    /// Resolve and validate the runtime configuration
    pub fn to_config(&self) -> Result<Config> {
        Config::new(self.common.csv_path.clone(), &self.bind_addr)
    }
}

/// Arguments for the check command
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only report the first N records
    #[arg(long = "limit", value_name = "N", help = "Only report the first N records")]
    pub limit: Option<i64>,

    /// Print the parsed records as JSON
    #[arg(long = "print", help = "Print the parsed records as JSON")]
    pub print: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_args() {
        let args = Args::try_parse_from([
            "csv-data-api",
            "serve",
            "--csv-path",
            "/tmp/people.csv",
            "--bind",
            "0.0.0.0:9000",
            "-v",
        ])
        .unwrap();

        match args.command {
            Commands::Serve(serve) => {
                assert_eq!(serve.common.csv_path, PathBuf::from("/tmp/people.csv"));
                assert_eq!(serve.bind_addr, "0.0.0.0:9000");
                assert_eq!(serve.common.get_log_level(), "debug");
                let config = serve.to_config().unwrap();
                assert_eq!(config.bind_addr.port(), 9000);
            }
            other => panic!("expected serve command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_args() {
        let args =
            Args::try_parse_from(["csv-data-api", "check", "--limit", "2", "--print", "-q"])
                .unwrap();

        match args.command {
            Commands::Check(check) => {
                assert_eq!(check.limit, Some(2));
                assert!(check.print);
                assert_eq!(check.common.get_log_level(), "error");
            }
            other => panic!("expected check command, got {:?}", other),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["csv-data-api", "serve", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_levels() {
        let mut common = CommonArgs::default();
        assert_eq!(common.get_log_level(), "info");
        common.verbose = 2;
        assert_eq!(common.get_log_level(), "trace");
        common.verbose = 0;
        common.quiet = true;
        assert_eq!(common.get_log_level(), "error");
    }

    #[test]
    fn test_invalid_bind_address_rejected() {
        let serve = ServeArgs {
            common: CommonArgs::default(),
            bind_addr: "not-an-address".to_string(),
        };
        assert!(serve.to_config().is_err());
    }
}
