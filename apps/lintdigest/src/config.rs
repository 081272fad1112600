//! Configuration discovery and effective settings resolution.
//!
//! lintdigest reads `lintdigest.toml|yaml|yml` from the starting directory
//! (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config.
//! Defaults:
//! - `cwd`: the starting directory
//! - `linter`: `npx eslint`
//! - `paths`: `src`, `electron`
//! - `extensions`: `.ts`, `.vue`
//! - `output`: `human`
//! - `report.limit`: 20
//! - `report.relative_paths`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_NAMES: [&str; 3] = ["lintdigest.toml", "lintdigest.yaml", "lintdigest.yml"];
pub const DEFAULT_LINTER: [&str; 2] = ["npx", "eslint"];
pub const DEFAULT_PATHS: [&str; 2] = ["src", "electron"];
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".ts", ".vue"];
pub const DEFAULT_WARNING_LIMIT: usize = 20;

#[derive(Debug, Default, Deserialize, Clone)]
/// Reporting section under `[report]`.
pub struct ReportCfg {
    pub limit: Option<usize>,
    pub relative_paths: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintdigest.toml|yaml`.
pub struct DigestConfig {
    /// Working directory for the linter, relative to the config file.
    pub cwd: Option<String>,
    pub linter: Option<Vec<String>>,
    pub paths: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub output: Option<String>,
    #[serde(default)]
    pub report: Option<ReportCfg>,
}

/// Values given on the command line; `None` means "not passed".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub cwd: Option<String>,
    pub linter: Option<String>,
    pub paths: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub output: Option<String>,
    pub limit: Option<usize>,
    pub relative_paths: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by a run after applying precedence.
pub struct Effective {
    pub cwd: PathBuf,
    pub linter: Vec<String>,
    pub paths: Vec<String>,
    pub extensions: Vec<String>,
    pub output: String,
    pub warning_limit: usize,
    pub relative_paths: bool,
}

/// Outcome of looking for a config file.
#[derive(Debug)]
pub enum Loaded {
    Found(PathBuf, DigestConfig),
    Invalid(PathBuf, String),
    Missing,
}

/// Walk upward from `start` to find the directory holding a config file.
///
/// Stops at the first `lintdigest.*` file or at a `.git` directory.
pub fn find_config_root(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).is_file()) {
            return Some(cur.to_path_buf());
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Load `DigestConfig` from `lintdigest.toml` or `lintdigest.yaml|yml` in `root`.
pub fn load_config(root: &Path) -> Loaded {
    for name in CONFIG_NAMES {
        let p = root.join(name);
        if !p.is_file() {
            continue;
        }
        let s = match fs::read_to_string(&p) {
            Ok(s) => s,
            Err(e) => return Loaded::Invalid(p, e.to_string()),
        };
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<DigestConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<DigestConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Loaded::Found(p, cfg),
            Err(e) => Loaded::Invalid(p, e),
        };
    }
    Loaded::Missing
}

/// Resolve `Effective` by merging CLI flags, a loaded config, and defaults.
///
/// `start` is the directory discovery began from; a configured `cwd` is
/// resolved against the config's own directory, a CLI `--cwd` against `start`.
pub fn resolve_effective(start: &Path, loaded: &Loaded, cli: &Overrides) -> Effective {
    let (config_root, cfg) = match loaded {
        Loaded::Found(path, cfg) => (path.parent().map(Path::to_path_buf), cfg.clone()),
        _ => (None, DigestConfig::default()),
    };

    let cwd = match (&cli.cwd, &cfg.cwd) {
        (Some(c), _) => start.join(c),
        (None, Some(c)) => config_root.as_deref().unwrap_or(start).join(c),
        (None, None) => start.to_path_buf(),
    };

    let linter = cli
        .linter
        .as_deref()
        .map(split_command)
        .or(cfg.linter)
        .unwrap_or_else(|| to_owned(&DEFAULT_LINTER));

    let paths = cli
        .paths
        .clone()
        .or(cfg.paths)
        .unwrap_or_else(|| to_owned(&DEFAULT_PATHS));

    let extensions = cli
        .extensions
        .clone()
        .or(cfg.extensions)
        .unwrap_or_else(|| to_owned(&DEFAULT_EXTENSIONS));

    let output = cli
        .output
        .clone()
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let warning_limit = cli
        .limit
        .or_else(|| cfg.report.as_ref().and_then(|r| r.limit))
        .unwrap_or(DEFAULT_WARNING_LIMIT);
    let relative_paths = cli
        .relative_paths
        .or_else(|| cfg.report.as_ref().and_then(|r| r.relative_paths))
        .unwrap_or(false);

    Effective {
        cwd,
        linter,
        paths,
        extensions,
        output,
        warning_limit,
        relative_paths,
    }
}

/// Split a `--linter` value like `"npx eslint"` on whitespace.
pub fn split_command(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
