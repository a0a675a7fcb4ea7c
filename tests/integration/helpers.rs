//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use framecap::Manifest;

/// Directory holding the JSON fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Read a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("missing fixture {}: {}", name, e))
}

/// Parse a manifest fixture.
pub fn manifest_fixture(name: &str) -> Manifest {
    Manifest::from_json(&load_fixture(name)).expect("fixture is a valid manifest")
}

/// The framecap binary with colors and logging quiet.
pub fn framecap() -> Command {
    let mut cmd = Command::cargo_bin("framecap").expect("framecap binary is built");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create empty image files named `names` inside `dir`.
pub fn touch_all(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}
