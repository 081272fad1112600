//! Linter invocation.
//!
//! Runs the configured command once, blocking until it exits, and captures
//! its output as text. A non-zero exit status is expected whenever the linter
//! finds problems and is not treated as a failure.

use crate::config::Effective;
use crate::error::DigestError;
use std::path::Path;
use std::process::Command;

/// Captured result of a linter run.
#[derive(Debug, Clone, PartialEq)]
pub struct LinterOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub status: Option<i32>,
}

/// Full argument vector: linter command, then paths and format flags.
pub fn build_args(eff: &Effective) -> Vec<String> {
    let mut args = eff.linter.clone();
    args.extend(eff.paths.iter().cloned());
    args.push("--ext".into());
    args.push(eff.extensions.join(","));
    args.push("--format".into());
    args.push("json".into());
    args
}

/// Program name to hand to the OS; npm shims are `.cmd` files on Windows.
fn resolve_program(program: &str) -> String {
    if cfg!(windows) && matches!(program, "npx" | "npm" | "pnpm" | "yarn") {
        format!("{}.cmd", program)
    } else {
        program.to_string()
    }
}

/// Spawn `args[0]` with the remaining arguments in `cwd` and wait for it.
pub fn run_command(args: &[String], cwd: &Path) -> Result<LinterOutput, DigestError> {
    let (program, rest) = args.split_first().ok_or(DigestError::EmptyCommand)?;
    let out = Command::new(resolve_program(program))
        .args(rest)
        .current_dir(cwd)
        .output()
        .map_err(|source| DigestError::Spawn {
            program: program.clone(),
            source,
        })?;
    Ok(LinterOutput {
        stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        status: out.status.code(),
    })
}

/// Run the linter described by `eff`.
pub fn run_linter(eff: &Effective) -> Result<LinterOutput, DigestError> {
    if eff.linter.is_empty() {
        return Err(DigestError::EmptyCommand);
    }
    run_command(&build_args(eff), &eff.cwd)
}
