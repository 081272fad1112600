#![cfg(unix)]

use lintdigest::config::{resolve_effective, Effective, Loaded, Overrides};
use lintdigest::error::DigestError;
use lintdigest::models::Digest;
use lintdigest::output::{render_failure, render_no_output, render_report, RenderOpts};
use lintdigest::runner::run_linter;
use lintdigest::digest_output;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Effective config whose "linter" is `sh fake.sh`; the script ignores the
/// eslint arguments, records them, and prints `payload` to stdout.
fn fake_linter(root: &Path, script: &str) -> Effective {
    fs::write(root.join("fake.sh"), script).unwrap();
    let cli = Overrides {
        linter: Some("sh fake.sh".into()),
        ..Default::default()
    };
    resolve_effective(root, &Loaded::Missing, &cli)
}

fn run_digest(eff: &Effective) -> Result<Digest, DigestError> {
    digest_output(run_linter(eff)?)
}

fn plain() -> RenderOpts<'static> {
    RenderOpts {
        warning_limit: 20,
        color: false,
        relative_to: None,
    }
}

#[test]
fn test_single_error_end_to_end() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let payload = r#"[{"filePath":"a.ts","messages":[{"line":1,"column":2,"ruleId":"no-unused-vars","severity":2,"message":"x unused"}]}]"#;
    fs::write(root.join("payload.json"), payload).unwrap();
    let eff = fake_linter(root, "echo \"$@\" > args.txt\ncat payload.json\nexit 1\n");

    let digest = run_digest(&eff).unwrap();
    let Digest::Report(report) = digest else {
        panic!("expected a report");
    };
    let out = render_report(&report, &plain());
    assert!(out.starts_with("Found 1 errors and 0 warnings.\n"));
    assert!(out.contains("ERRORS:\n[no-unused-vars] a.ts:1:2 - x unused\n"));

    let args = fs::read_to_string(root.join("args.txt")).unwrap();
    assert_eq!(args.trim(), "src electron --ext .ts,.vue --format json");
}

#[test]
fn test_twenty_five_warnings_end_to_end() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let messages: Vec<_> = (1..=25)
        .map(|i| json!({"line": i, "column": 1, "ruleId": "no-console", "severity": 1, "message": "console"}))
        .collect();
    let payload = json!([{"filePath": "src/main.ts", "messages": messages}]);
    fs::write(root.join("payload.json"), payload.to_string()).unwrap();
    let eff = fake_linter(root, "cat payload.json\n");

    let Digest::Report(report) = run_digest(&eff).unwrap() else {
        panic!("expected a report");
    };
    let out = render_report(&report, &plain());
    assert!(out.starts_with("Found 0 errors and 25 warnings.\n"));
    let (_, listing) = out.split_once("WARNINGS (Top 20):\n").unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "[no-console] src/main.ts:1:1 - console");
    assert_eq!(lines[20], "... and 5 more warnings.");
}

#[test]
fn test_empty_stdout_surfaces_stderr() {
    let dir = tempdir().unwrap();
    let eff = fake_linter(dir.path(), "echo 'eslint: not found' >&2\nexit 127\n");
    assert_eq!(run_linter(&eff).unwrap().status, Some(127));
    let digest = run_digest(&eff).unwrap();
    let Digest::NoOutput { stderr } = digest else {
        panic!("expected no output");
    };
    assert_eq!(
        render_no_output(&stderr),
        "No output from ESLint\nError: eslint: not found\n\n"
    );
}

#[test]
fn test_non_json_stdout_fails_with_description() {
    let dir = tempdir().unwrap();
    let eff = fake_linter(dir.path(), "printf '\"not json\"'\n");
    let err = run_digest(&eff).unwrap_err();
    assert!(matches!(err, DigestError::Decode(_)));
    let line = render_failure(&err);
    assert!(line.starts_with("Failed to parse lint output: "));
    assert!(line.len() > "Failed to parse lint output: \n".len());
}

#[test]
fn test_cwd_from_config_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let web = root.join("web");
    fs::create_dir(&web).unwrap();
    fs::write(web.join("fake.sh"), "printf '[]'\n").unwrap();
    fs::write(
        root.join("lintdigest.toml"),
        "cwd = \"web\"\nlinter = [\"sh\", \"fake.sh\"]\n",
    )
    .unwrap();
    let loaded = lintdigest::config::load_config(root);
    let eff = resolve_effective(root, &loaded, &Overrides::default());
    let Digest::Report(report) = run_digest(&eff).unwrap() else {
        panic!("expected a report");
    };
    assert!(report.is_clean());
}
