//! Decoding of linter output and severity partitioning.

use crate::error::DigestError;
use crate::models::eslint::FileResult;
use crate::models::{LintMessage, LintReport, Severity};

/// Decode the linter's stdout as the ESLint JSON array.
pub fn parse_output(stdout: &str) -> Result<Vec<FileResult>, DigestError> {
    Ok(serde_json::from_str(stdout)?)
}

/// Flatten file entries into a report, keeping file-then-message order
/// inside each bucket.
pub fn build_report(files: Vec<FileResult>) -> LintReport {
    let mut report = LintReport::default();
    for entry in files {
        for raw in entry.messages {
            report.push(LintMessage {
                file: entry.file_path.clone(),
                line: raw.line,
                column: raw.column,
                rule: raw.rule_id,
                severity: Severity::from_code(raw.severity.as_ref()),
                message: raw.message,
            });
        }
    }
    report
}
