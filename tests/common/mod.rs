//! Shared test helpers

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a command for the odt binary
pub fn odt() -> Command {
    Command::cargo_bin("odt").expect("odt binary should build")
}

/// Create an empty temp directory for a test
pub fn setup_dir() -> TempDir {
    tempfile::tempdir().expect("temp dir should be created")
}

/// Create a scenario file through the CLI and return its path
pub fn create_scenario(tmp: &TempDir, title: &str) -> PathBuf {
    let path = tmp.path().join("scenario.odt.yaml");
    odt()
        .current_dir(tmp.path())
        .args([
            "new",
            "--title",
            title,
            "--author",
            "Test Author",
            "--output",
            path.to_str().expect("utf-8 temp path"),
        ])
        .assert()
        .success();
    path
}
