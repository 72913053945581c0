// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Used by most integration tests, but not all.
pub fn selcat_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("selcat"));
    // All integration tests assert on stdout; the clipboard is unavailable in
    // headless test environments.
    cmd.arg("--stdout");
    cmd
}
