//! Shared components for CLI commands
//!
//! Logging setup and service wiring used by every command.

use crate::Result;
use crate::app::services::data_service::DataService;
use crate::app::services::record_parser::RecordParser;
use crate::cli::args::CommonArgs;
use crate::constants::LOG_TARGET;
use std::path::Path;
use tracing::debug;

/// Set up structured logging
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Wire a data service reading `csv_path` from the local disk
pub fn build_data_service(csv_path: &Path) -> DataService {
    DataService::new(RecordParser::default(), csv_path)
}
