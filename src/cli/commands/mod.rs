//! Command implementations for the CSV data API CLI
//!
//! Each command is implemented in its own module:
//! - `serve`: HTTP server over the configured CSV file
//! - `check`: one-shot parse of the CSV file with a summary on stdout

pub mod check;
pub mod serve;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Serve(serve_args) => serve::run_serve(serve_args).await,
        Commands::Check(check_args) => check::run_check(check_args).await.map(|_| ()),
    }
}
