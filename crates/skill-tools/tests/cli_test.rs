//! Integration tests that run the `init-skill` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use walkdir::WalkDir;

fn init_skill(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_init-skill"))
        .args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run init-skill")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_creates_bundle_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    let output = init_skill(
        &["my-new-skill", "--path", out.to_str().unwrap()],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Created skill directory"));
    assert!(text.contains("Created SKILL.md"));
    assert!(text.contains("Created scripts/example.py"));
    assert!(text.contains("Created references/api_reference.md"));
    assert!(text.contains("Created assets/README.md"));
    assert!(text.contains("'my-new-skill' initialized at"));
    assert!(text.contains("Next steps"));

    let manifest = fs::read_to_string(out.join("my-new-skill/SKILL.md")).unwrap();
    assert!(manifest.contains("name: my-new-skill"));
    assert!(manifest.contains("My New Skill"));
}

#[test]
fn test_relative_path_resolves_against_working_directory() {
    let temp = TempDir::new().unwrap();

    let output = init_skill(&["rel-skill", "--path", "skills"], temp.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(temp.path().join("skills/rel-skill/SKILL.md").is_file());
}

#[test]
fn test_invalid_name_exits_one_and_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    for name in ["bad_name!", "Uppercase", "has space"] {
        let output = init_skill(&[name, "--path", out.to_str().unwrap()], temp.path());

        assert_eq!(output.status.code(), Some(1), "{} should be rejected", name);
        assert!(stdout(&output).contains("lowercase alphanumeric with hyphens"));
    }

    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_second_invocation_reports_existing_directory() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let path = out.to_str().unwrap();

    assert_eq!(init_skill(&["dup", "--path", path], temp.path()).status.code(), Some(0));
    let output = init_skill(&["dup", "--path", path], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("already exists"));
    assert_eq!(
        WalkDir::new(out.join("dup"))
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .count(),
        4
    );
}

#[test]
fn test_nested_missing_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("newroot").join("sub");

    let output = init_skill(&["deep", "--path", root.to_str().unwrap()], temp.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(root.join("deep/assets/README.md").is_file());
}

#[test]
fn test_script_flag_selects_language() {
    let temp = TempDir::new().unwrap();

    let output = init_skill(
        &["js-skill", "--path", "out", "--script", "javascript"],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let script = temp.path().join("out/js-skill/scripts/example.js");
    assert!(fs::read_to_string(script)
        .unwrap()
        .starts_with("#!/usr/bin/env node"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().unwrap();

    let output = init_skill(&["loud", "--path", "out", "--verbose"], temp.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("bundle complete"));
    assert!(!stdout(&output).contains("bundle complete"));
}
