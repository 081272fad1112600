//! Schema of ESLint's `--format json` output.
//!
//! Only the fields the digest reads are modeled; the rest (`errorCount`,
//! `fatal`, `source`, ...) are ignored by serde.

use serde::Deserialize;
use serde_json::Value as Json;

#[derive(Debug, Deserialize)]
/// One linted file with its messages in reported order.
pub struct FileResult {
    #[serde(rename = "filePath")]
    pub file_path: String,
    pub messages: Vec<RawMessage>,
}

#[derive(Debug, Deserialize)]
/// A message as emitted by the linter, before classification.
pub struct RawMessage {
    #[serde(default)]
    pub line: Option<i64>,
    #[serde(default)]
    pub column: Option<i64>,
    #[serde(default, rename = "ruleId")]
    pub rule_id: Option<String>,
    /// Kept untyped: anything other than the numeric code 2 is a warning.
    #[serde(default)]
    pub severity: Option<Json>,
    #[serde(default)]
    pub message: Option<String>,
}
