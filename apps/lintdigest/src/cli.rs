//! CLI argument parsing via `clap`.

use crate::config::Overrides;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lintdigest",
    version,
    about = "Run ESLint and print an errors/warnings digest",
    long_about = "lintdigest runs ESLint with JSON output, splits the reported messages into errors (severity 2) and warnings, and prints a short summary.\n\nWith no flags it runs `npx eslint src electron --ext .ts,.vue --format json` in the current directory.\n\nConfiguration precedence: CLI > lintdigest.toml > defaults.",
    after_help = "Examples:\n  lintdigest\n  lintdigest --cwd frontend --path src --path electron\n  lintdigest --linter \"pnpm exec eslint\" --ext .ts --ext .tsx --limit 50\n  lintdigest --output json"
)]
/// Top-level CLI options. Every flag is optional.
pub struct Cli {
    #[arg(long, help = "Directory to run the linter in (default: current dir)")]
    pub cwd: Option<String>,
    #[arg(long, help = "Linter command, split on whitespace (default: \"npx eslint\")")]
    pub linter: Option<String>,
    #[arg(long = "path", help = "Target path; repeatable (default: src, electron)")]
    pub paths: Vec<String>,
    #[arg(long = "ext", help = "File extension; repeatable (default: .ts, .vue)")]
    pub extensions: Vec<String>,
    #[arg(long, help = "Maximum number of warnings listed (default: 20)")]
    pub limit: Option<usize>,
    #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Print file paths relative to the linter's directory")]
    pub relative: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored headings")]
    pub no_color: bool,
}

impl Cli {
    /// Flags as config overrides; absent or empty values mean "not passed".
    pub fn overrides(&self) -> Overrides {
        let non_empty = |v: &Vec<String>| (!v.is_empty()).then(|| v.clone());
        Overrides {
            cwd: self.cwd.clone(),
            linter: self.linter.clone(),
            paths: non_empty(&self.paths),
            extensions: non_empty(&self.extensions),
            output: self.output.clone(),
            limit: self.limit,
            relative_paths: self.relative.then_some(true),
        }
    }
}
