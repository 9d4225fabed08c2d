// ============================================================================
// sigfig-average
// Averages the two lab measurements at two significant figures
// ============================================================================

use sigfig_average::prelude::*;
use std::process::ExitCode;
use std::sync::Arc;

/// Measured lengths, in centimeters
const FIRST_MEASUREMENT: f64 = 5.74;
const SECOND_MEASUREMENT: f64 = 5.72;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    match run() {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run() -> NumericResult<Measurement> {
    let config = RoundingConfig::classroom();
    let averager = create_from_config(&config, Arc::new(LoggingEventHandler))?;

    tracing::info!(
        sig_figs = %averager.sig_figs(),
        tie_break = %config.tie_break,
        "averaging measurements"
    );

    averager.average(
        Measurement::from_f64(FIRST_MEASUREMENT)?,
        Measurement::from_f64(SECOND_MEASUREMENT)?,
    )
}
