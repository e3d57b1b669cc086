use syscov::commands::{build_report, list_exclusions_command, ReportOptions};
use tempfile::tempdir;

#[test]
fn default_options_scan_c_files_in_cwd() {
    let opts = ReportOptions::default();
    assert_eq!(opts.dir, ".");
    assert_eq!(opts.ext, "c");
    assert!(opts.stap.is_none());
    assert!(!opts.json);
}

#[test]
fn build_report_names_failed_stage() {
    let temp = tempdir().unwrap();
    let opts = ReportOptions {
        dir: temp.path().to_string_lossy().to_string(),
        stap: Some(temp.path().join("missing-stap")),
        ..Default::default()
    };

    let err = build_report(&opts).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("Failed to enumerate entry points"));
    assert!(chain.contains("failed to spawn"));
}

#[test]
fn list_exclusions_succeeds_in_both_modes() {
    list_exclusions_command(false).unwrap();
    list_exclusions_command(true).unwrap();
}

#[cfg(unix)]
#[test]
fn build_report_names_source_listing_stage() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    let stap = temp.path().join("stap");
    std::fs::write(&stap, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&stap, std::fs::Permissions::from_mode(0o755)).unwrap();
    let opts = ReportOptions {
        dir: temp.path().join("missing").to_string_lossy().to_string(),
        stap: Some(stap),
        ..Default::default()
    };

    let chain = format!("{:#}", build_report(&opts).unwrap_err());
    assert!(chain.contains("Failed to list test sources"), "{chain}");
}
