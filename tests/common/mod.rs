//! Common test utilities for Captable CLI tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{TimeZone, Utc};

/// Command for the captable binary with color disabled for stable output
pub fn captable() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_captable"));
    cmd.env("NO_COLOR", "1");
    cmd.env("TERM", "dumb");
    cmd
}

/// Write the sample structure (fixed timestamp) as JSON under `dir`
pub fn write_sample_file(dir: &Path) -> PathBuf {
    let structure =
        captable::sample_structure(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
    let path = dir.join("structure.json");
    std::fs::write(&path, serde_json::to_string_pretty(&structure).unwrap()).unwrap();
    path
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
