//! Tests for the shared entry point with captured output.

#![allow(clippy::unwrap_used)]

use linestrip::entry_point::run_with_args_to;
use std::fs;
use tempfile::tempdir;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_confirmation_is_the_only_output() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("input.txt");
    fs::write(&file_path, "a\nb\nc\n").unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec![file_path.to_string_lossy().to_string(), "-r".to_owned(), "2".to_owned()],
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    assert_eq!(String::from_utf8(buffer).unwrap(), "Fixed - removed lines 2-2\n");
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "a\nc\n");
}

#[test]
fn test_missing_file_is_an_error_with_no_output() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.tsx");

    let mut buffer = Vec::new();
    let result = run_with_args_to(vec![missing.to_string_lossy().to_string()], &mut buffer);

    assert!(result.is_err());
    assert!(buffer.is_empty());
}

#[test]
fn test_overlapping_ranges_fail_before_writing() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("input.txt");
    fs::write(&file_path, "1\n2\n3\n4\n5\n").unwrap();

    let mut buffer = Vec::new();
    let err = run_with_args_to(
        vec![
            file_path.to_string_lossy().to_string(),
            "-r".to_owned(),
            "1-3".to_owned(),
            "-r".to_owned(),
            "3-4".to_owned(),
        ],
        &mut buffer,
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("overlapping line ranges"));
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "1\n2\n3\n4\n5\n");
}

#[test]
fn test_json_report() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("input.txt");
    fs::write(&file_path, "1\n2\n3\n").unwrap();

    let mut buffer = Vec::new();
    run_with_args_to(
        vec![
            file_path.to_string_lossy().to_string(),
            "--range".to_owned(),
            "3:10".to_owned(),
            "--json".to_owned(),
        ],
        &mut buffer,
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["original_lines"], 3);
    assert_eq!(value["remaining_lines"], 2);
    assert_eq!(value["removed"].as_array().unwrap().len(), 1);
    assert_eq!(value["ranges"][0]["end"], 10);
}

#[test]
fn test_help_and_version_exit_zero() {
    let mut buffer = Vec::new();
    assert_eq!(run_with_args_to(args(&["--help"]), &mut buffer).unwrap(), 0);
    let help = String::from_utf8(buffer).unwrap();
    assert!(help.contains("--range"));
    assert!(help.contains(".linestrip.toml"));

    let mut buffer = Vec::new();
    assert_eq!(run_with_args_to(args(&["--version"]), &mut buffer).unwrap(), 0);
    assert!(String::from_utf8(buffer).unwrap().contains("linestrip"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let mut buffer = Vec::new();
    assert_eq!(run_with_args_to(args(&["--bogus"]), &mut buffer).unwrap(), 1);
    assert!(buffer.is_empty());
}

#[test]
fn test_dry_run_via_entry_point() {
    colored::control::set_override(false);
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("input.txt");
    fs::write(&file_path, "keep\ndrop\n").unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec![
            file_path.to_string_lossy().to_string(),
            "-r".to_owned(),
            "2".to_owned(),
            "--dry-run".to_owned(),
        ],
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("drop"));
    assert!(output.contains("1 of 2 lines would be removed, 1 would remain."));
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "keep\ndrop\n");
}
