//! CLI subcommand implementations.

pub mod errors;
pub mod expand;
pub mod info;
pub mod shorten;
pub mod stats;

use anyhow::Result;

/// Prints the envelope behind a failed call to stderr and turns the failure
/// into an `anyhow` error.
pub(crate) fn report_failure(err: bitly_api::Error) -> anyhow::Error {
    if let Some(envelope) = err.envelope() {
        if let Ok(json) = serde_json::to_string_pretty(envelope) {
            eprintln!("{}", json);
        }
    }
    anyhow::Error::new(err)
}

pub(crate) fn or_report<T>(result: Result<T, bitly_api::Error>) -> Result<T> {
    result.map_err(report_failure)
}
