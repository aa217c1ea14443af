//! Check command: parse the CSV file once and report the outcome

use std::io::Write;
use tracing::{error, info};

use super::shared::{build_data_service, setup_logging};
use crate::app::services::data_service::DataService;
use crate::cli::args::CheckArgs;
use crate::{Error, Result};

/// Parse the configured file, printing the record count or the records
///
/// Returns the number of records reported.
pub async fn run_check(args: CheckArgs) -> Result<usize> {
    setup_logging(&args.common)?;

    let service = build_data_service(&args.common.csv_path);
    let mut stdout = std::io::stdout().lock();
    write_check_report(&service, &args, &mut stdout)
}

/// Query the service and write either a count line or the records as JSON
pub fn write_check_report<W: Write>(
    service: &DataService,
    args: &CheckArgs,
    out: &mut W,
) -> Result<usize> {
    let records = service.query(args.limit).inspect_err(|e| {
        error!("Check failed for {}: {}", service.csv_path().display(), e);
    })?;

    info!(
        "{} parsed cleanly: {} records",
        service.csv_path().display(),
        records.len()
    );

    if args.print {
        serde_json::to_writer_pretty(&mut *out, &records)
            .map_err(|e| Error::io("Failed to write records", e.into()))?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{}: {} valid records",
            service.csv_path().display(),
            records.len()
        )?;
    }

    Ok(records.len())
}
