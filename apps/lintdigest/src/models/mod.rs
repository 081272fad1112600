//! Data models for classified lint messages and the per-run report.

pub mod eslint;

use serde::Serialize;

/// Severity code ESLint uses for errors; every other code is a warning.
pub const ERROR_CODE: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Classified severity of a lint message.
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Map a raw severity code. Only `2` is an error; absent or other values
    /// (including non-numeric ones) are warnings.
    pub fn from_code(code: Option<&serde_json::Value>) -> Self {
        match code.and_then(|v| v.as_f64()) {
            Some(c) if c == ERROR_CODE as f64 => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A single reported issue at a file location.
pub struct LintMessage {
    pub file: String,
    pub line: Option<i64>,
    pub column: Option<i64>,
    pub rule: Option<String>,
    pub severity: Severity,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Messages of one run, split by severity in encounter order.
pub struct LintReport {
    pub errors: Vec<LintMessage>,
    pub warnings: Vec<LintMessage>,
}

impl LintReport {
    /// Append a message to the bucket matching its severity.
    pub fn push(&mut self, msg: LintMessage) {
        match msg.severity {
            Severity::Error => self.errors.push(msg),
            Severity::Warning => self.warnings.push(msg),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Outcome of one linter run that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Digest {
    /// The linter printed nothing on stdout.
    NoOutput { stderr: String },
    Report(LintReport),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_severity_from_code() {
        assert_eq!(Severity::from_code(Some(&json!(2))), Severity::Error);
        assert_eq!(Severity::from_code(Some(&json!(2.0))), Severity::Error);
        assert_eq!(Severity::from_code(Some(&json!(1))), Severity::Warning);
        assert_eq!(Severity::from_code(Some(&json!(0))), Severity::Warning);
        assert_eq!(Severity::from_code(Some(&json!("2"))), Severity::Warning);
        assert_eq!(Severity::from_code(Some(&json!(null))), Severity::Warning);
        assert_eq!(Severity::from_code(None), Severity::Warning);
    }

    #[test]
    fn test_push_routes_by_severity() {
        let mk = |severity| LintMessage {
            file: "a.ts".into(),
            line: None,
            column: None,
            rule: None,
            severity,
            message: None,
        };
        let mut report = LintReport::default();
        assert!(report.is_clean());
        report.push(mk(Severity::Warning));
        report.push(mk(Severity::Error));
        report.push(mk(Severity::Warning));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 2);
        assert!(!report.is_clean());
    }
}
