//! # Spherical Segments CLI
//!
//! Console calculator: asks how many segments to evaluate, collects R, ha and
//! hb for each one, prints its total surface area and volume, then prints the
//! averages. Takes no arguments. Diagnostics go to stderr, controlled by
//! `RUST_LOG`.

mod logger;

use std::io;
use std::process::ExitCode;

use sphere_core::{Session, SessionSettings};

fn main() -> ExitCode {
    logger::init_cli_logger();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let outcome = Session::new(stdin.lock(), stdout.lock(), SessionSettings::default())
        .and_then(|mut session| session.run());

    match outcome {
        Ok(summary) => {
            tracing::debug!(
                "Average area {} and volume {} over {} segments",
                summary.averages.area,
                summary.averages.volume,
                summary.segment_count
            );
            match summary.to_json_pretty() {
                Ok(json) => tracing::debug!("Session summary JSON:\n{}", json),
                Err(e) => tracing::warn!("Could not serialize session summary: {}", e),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Calculator stopped ({}): {}", e.error_code(), e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
