//! Event firing specs
//!
//! Verify `hk fire` runs configured handlers alongside the built-in
//! log subscribers, and that detaching them leaves handlers in place.

use crate::prelude::*;

const PRINT_MANIFEST: &str = r#"
[[instrumentation]]
name = "process_action.controller"
action = "print"
"#;

#[test]
fn fire_runs_handler_with_payload() {
    let temp = Project::empty();
    temp.file("hooks.toml", PRINT_MANIFEST);

    temp.hk()
        .args(&[
            "fire",
            "hooks.toml",
            "process_action.controller",
            "--payload",
            r#"{"status": 200}"#,
        ])
        .passes()
        .stdout_has(r#""name":"process_action.controller""#)
        .stdout_has(r#""status":200"#);
}

#[test]
fn fire_logs_through_builtin_subscribers() {
    let temp = Project::empty();
    temp.file("hooks.toml", PRINT_MANIFEST);

    temp.hk()
        .args(&[
            "fire",
            "hooks.toml",
            "process_action.controller",
            "-p",
            r#"{"status": 200}"#,
        ])
        .passes()
        .stderr_has("Completed 200 in");
}

#[test]
fn unsubscribe_flag_detaches_builtin_subscribers() {
    let temp = Project::empty();
    temp.file("hooks.toml", PRINT_MANIFEST);

    temp.hk()
        .args(&[
            "fire",
            "hooks.toml",
            "process_action.controller",
            "--payload",
            r#"{"status": 200}"#,
            "--unsubscribe-defaults",
        ])
        .passes()
        .stdout_has(r#""status":200"#)
        .stderr_has("removed=12")
        .stderr_lacks("Completed 200");
}

#[test]
fn manifest_unsubscribe_detaches_builtin_subscribers() {
    let temp = Project::empty();
    temp.file(
        "hooks.toml",
        &format!("unsubscribe_defaults = true\n{}", PRINT_MANIFEST),
    );

    temp.hk()
        .args(&[
            "fire",
            "hooks.toml",
            "process_action.controller",
            "--payload",
            r#"{"status": 200}"#,
        ])
        .passes()
        .stdout_has(r#""status":200"#)
        .stderr_lacks("Completed 200");
}

#[test]
fn no_defaults_skips_builtin_subscribers() {
    let temp = Project::empty();
    temp.file("hooks.toml", PRINT_MANIFEST);

    temp.hk()
        .args(&[
            "fire",
            "hooks.toml",
            "process_action.controller",
            "--no-defaults",
        ])
        .passes()
        .stdout_has(r#""name":"process_action.controller""#)
        .stderr_lacks("Completed");
}

#[test]
fn log_action_writes_to_file_logger() {
    let temp = Project::empty();
    temp.file(
        "hooks.toml",
        r#"
[[instrumentation]]
name = "sql.record"
action = "log"
logger = "file:logs/sql.log"
"#,
    );

    temp.hk()
        .args(&[
            "fire",
            "hooks.toml",
            "sql.record",
            "--payload",
            r#"{"sql": "SELECT 1"}"#,
        ])
        .passes();

    let log = temp.read("logs/sql.log");
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("sql.record ("), "log was: {}", log);
    assert!(log.contains("SELECT 1"), "log was: {}", log);
}

#[test]
fn unmatched_event_warns_and_passes() {
    let temp = Project::empty();
    temp.file("hooks.toml", MINIMAL_MANIFEST);

    temp.hk()
        .args(&["fire", "hooks.toml", "deliver.nowhere", "--no-defaults"])
        .passes()
        .stderr_has("no listeners for event")
        .stdout_eq("");
}

#[test]
fn handler_and_default_share_event() {
    let temp = Project::empty();
    temp.file("hooks.toml", MINIMAL_MANIFEST);

    let run = temp
        .hk()
        .args(&[
            "fire",
            "hooks.toml",
            "process_action.controller",
            "--payload",
            r#"{"status": 201}"#,
        ])
        .passes()
        .stderr_has("Completed 201 in")
        .stderr_has("process_action.controller (");

    assert_eq!(run.stdout(), "");
}
