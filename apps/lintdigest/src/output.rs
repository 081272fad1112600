//! Output rendering for lint digests.
//!
//! Supports `human` (default) and `json` outputs. Rendering is pure: the
//! `render_*` and `compose_*` functions build the text, `print_*` write it.

use crate::models::{Digest, LintMessage, LintReport};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::io::{self, Write};
use std::path::Path;

/// Prefix of the single line printed when a run fails.
pub const FAILURE_PREFIX: &str = "Failed to parse lint output:";

/// Human rendering options.
#[derive(Debug, Clone, Copy)]
pub struct RenderOpts<'a> {
    pub warning_limit: usize,
    pub color: bool,
    /// Render file paths relative to this directory when set.
    pub relative_to: Option<&'a Path>,
}

fn use_colors(output: &str, no_color: bool) -> bool {
    output != "json" && !no_color && crate::utils::colors_enabled()
}

fn placeholder<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| "-".to_string())
}

fn display_path(file: &str, base: Option<&Path>) -> String {
    base.and_then(|b| pathdiff::diff_paths(file, b))
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| file.to_string())
}

/// Format one message as `[rule] file:line:column - message`.
/// Absent rule, line, column or message text (e.g. `ruleId: null` on fatal
/// parse errors) render as `-`.
pub fn format_message(msg: &LintMessage, relative_to: Option<&Path>) -> String {
    format!(
        "[{}] {}:{}:{} - {}",
        placeholder(msg.rule.as_deref()),
        display_path(&msg.file, relative_to),
        placeholder(msg.line),
        placeholder(msg.column),
        placeholder(msg.message.as_deref()),
    )
}

/// Render the summary, the full error list and the capped warning list.
pub fn render_report(report: &LintReport, opts: &RenderOpts) -> String {
    let heading = |s: &str, red: bool| -> String {
        match (opts.color, red) {
            (false, _) => s.to_string(),
            (true, true) => s.red().bold().to_string(),
            (true, false) => s.yellow().bold().to_string(),
        }
    };
    let mut out = String::new();
    out.push_str(&format!(
        "Found {} errors and {} warnings.\n\n",
        report.errors.len(),
        report.warnings.len()
    ));

    if !report.errors.is_empty() {
        out.push_str(&heading("ERRORS:", true));
        out.push('\n');
        for e in &report.errors {
            out.push_str(&format_message(e, opts.relative_to));
            out.push('\n');
        }
        out.push_str("\n\n");
    }

    if !report.warnings.is_empty() {
        out.push_str(&heading(
            &format!("WARNINGS (Top {}):", opts.warning_limit),
            false,
        ));
        out.push('\n');
        for w in report.warnings.iter().take(opts.warning_limit) {
            out.push_str(&format_message(w, opts.relative_to));
            out.push('\n');
        }
        if report.warnings.len() > opts.warning_limit {
            out.push_str(&format!(
                "... and {} more warnings.\n",
                report.warnings.len() - opts.warning_limit
            ));
        }
    }
    out
}

/// Render the empty-stdout notice, surfacing stderr when present.
pub fn render_no_output(stderr: &str) -> String {
    let mut out = String::from("No output from ESLint\n");
    if !stderr.is_empty() {
        out.push_str(&format!("Error: {}\n", stderr));
    }
    out
}

/// Render the single failure line.
pub fn render_failure(err: &dyn std::fmt::Display) -> String {
    format!("{} {}\n", FAILURE_PREFIX, err)
}

/// Compose the JSON object for a digest (pure) for testing purposes.
pub fn compose_digest_json(digest: &Digest, relative_to: Option<&Path>) -> JsonVal {
    match digest {
        Digest::NoOutput { stderr } => json!({"noOutput": true, "stderr": stderr}),
        Digest::Report(report) => {
            let items = |msgs: &[LintMessage]| -> Vec<JsonVal> {
                msgs.iter()
                    .map(|m| {
                        json!({
                            "file": display_path(&m.file, relative_to),
                            "line": m.line,
                            "column": m.column,
                            "rule": m.rule,
                            "severity": m.severity,
                            "message": m.message,
                        })
                    })
                    .collect()
            };
            json!({
                "errors": items(&report.errors),
                "warnings": items(&report.warnings),
                "summary": {
                    "errors": report.errors.len(),
                    "warnings": report.warnings.len(),
                },
            })
        }
    }
}

/// Render a digest in the requested output mode.
pub fn render_digest(
    digest: &Digest,
    output: &str,
    no_color: bool,
    warning_limit: usize,
    relative_to: Option<&Path>,
) -> String {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_digest_json(digest, relative_to)) {
            Ok(s) => format!("{}\n", s),
            Err(e) => render_failure(&e),
        },
        _ => match digest {
            Digest::NoOutput { stderr } => render_no_output(stderr),
            Digest::Report(report) => {
                let opts = RenderOpts {
                    warning_limit,
                    color: use_colors(output, no_color),
                    relative_to,
                };
                render_report(report, &opts)
            }
        },
    }
}

/// Write rendered text to `out` and flush it. Errors such as a closed pipe
/// are returned to the caller instead of panicking like `print!` does.
pub fn write_text<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Print a digest in the requested output mode to stdout.
pub fn print_digest(
    digest: &Digest,
    output: &str,
    no_color: bool,
    warning_limit: usize,
    relative_to: Option<&Path>,
) -> io::Result<()> {
    let text = render_digest(digest, output, no_color, warning_limit, relative_to);
    write_text(&mut io::stdout().lock(), &text)
}

/// Print the single failure line to stdout.
pub fn print_failure(err: &dyn std::fmt::Display) -> io::Result<()> {
    write_text(&mut io::stdout().lock(), &render_failure(err))
}
