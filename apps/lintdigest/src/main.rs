//! lintdigest CLI binary entry point.
//! Resolves configuration, runs the linter once and prints the digest.
//! Every outcome exits with status 0.

use clap::Parser;
use lintdigest::cli::Cli;
use lintdigest::config::{self, Loaded};
use lintdigest::{output, runner, utils};
use std::io;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let loaded = match config::find_config_root(&start) {
        Some(root) => config::load_config(&root),
        None => Loaded::Missing,
    };
    let eff = config::resolve_effective(&start, &loaded, &cli.overrides());
    let human = eff.output != "json";

    if human {
        match &loaded {
            Loaded::Missing => eprintln!(
                "{} No lintdigest.toml found; using defaults.",
                utils::note_prefix()
            ),
            Loaded::Invalid(path, e) => eprintln!(
                "{} Ignoring invalid config {}: {}",
                utils::error_prefix(),
                path.to_string_lossy(),
                e
            ),
            Loaded::Found(..) => {}
        }
        eprintln!(
            "{} Running `{}` in {}",
            utils::info_prefix(),
            runner::build_args(&eff).join(" "),
            eff.cwd.to_string_lossy()
        );
    }

    let base = eff.cwd.canonicalize().unwrap_or_else(|_| eff.cwd.clone());
    let relative_to = eff.relative_paths.then_some(base.as_path());
    let written = match runner::run_linter(&eff) {
        Ok(out) => {
            if human {
                let status = match out.status {
                    Some(code) => format!("exited with status {}", code),
                    None => "was terminated by a signal".to_string(),
                };
                eprintln!("{} Linter {}", utils::info_prefix(), status);
            }
            match lintdigest::digest_output(out) {
                Ok(digest) => output::print_digest(
                    &digest,
                    &eff.output,
                    cli.no_color,
                    eff.warning_limit,
                    relative_to,
                ),
                Err(e) => output::print_failure(&e),
            }
        }
        Err(e) => output::print_failure(&e),
    };

    // A reader that went away (e.g. `| head`) is not worth reporting.
    if let Err(e) = written {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("{} failed to write output: {}", utils::error_prefix(), e);
        }
    }
}
