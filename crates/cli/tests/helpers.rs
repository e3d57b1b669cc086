use std::fs;

use syscov::{canonicalize_or_current, log_level};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_resolves_existing_relative_path() {
    let original = std::env::current_dir().expect("cwd");
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("tests");
    fs::create_dir_all(&subdir).expect("create tests dir");
    std::env::set_current_dir(tmp.path()).expect("chdir tmp");

    let result = canonicalize_or_current("tests").expect("canonicalize tests");
    assert_eq!(result, subdir.canonicalize().expect("canonicalize subdir"));

    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
fn canonicalize_or_current_keeps_missing_path_absolute() {
    let result = canonicalize_or_current("no-such-dir-for-syscov").expect("resolve");
    assert!(result.is_absolute());
    assert!(result.ends_with("no-such-dir-for-syscov"));
}

#[test]
fn verbosity_maps_to_log_levels() {
    assert_eq!(log_level(0), "warn");
    assert_eq!(log_level(1), "debug");
    assert_eq!(log_level(2), "trace");
    assert_eq!(log_level(9), "trace");
}
