//! CLI help specs
//!
//! Verify the binary is reachable and lists its commands.

use crate::prelude::*;

#[test]
fn hk_binary_is_located_from_target_dir() {
    assert!(hk_bin().ends_with(format!("hk{}", std::env::consts::EXE_SUFFIX)));
}

#[test]
fn help_lists_commands() {
    let temp = Project::empty();

    temp.hk()
        .args(&["--help"])
        .passes()
        .stdout_has("check")
        .stdout_has("fire");
}

#[test]
fn version_prints_package_version() {
    let temp = Project::empty();

    temp.hk()
        .args(&["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}

#[test]
fn unknown_command_fails() {
    let temp = Project::empty();

    temp.hk().args(&["nope"]).fails().stderr_has("nope");
}
