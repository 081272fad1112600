//! lintdigest core library.
//!
//! Runs ESLint once with JSON output and turns the result into a short
//! errors/warnings digest.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `runner`: Linter child-process invocation.
//! - `report`: JSON decoding and severity partitioning.
//! - `models`: Messages, reports, and the ESLint output schema.
//! - `output`: Human/JSON printers.
//! - `error`: Run failures.
//! - `utils`: Stderr prefixes.
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;
pub mod runner;
pub mod utils;

use error::DigestError;
use models::Digest;
use runner::LinterOutput;

/// Turn captured linter output (see `runner::run_linter`) into a digest.
/// Empty stdout short-circuits before any decoding; the exit status is ignored.
pub fn digest_output(out: LinterOutput) -> Result<Digest, DigestError> {
    if out.stdout.is_empty() {
        return Ok(Digest::NoOutput { stderr: out.stderr });
    }
    let files = report::parse_output(&out.stdout)?;
    Ok(Digest::Report(report::build_report(files)))
}
