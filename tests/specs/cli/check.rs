//! Manifest check specs
//!
//! Verify `hk check` lists each instrumentation and reports detachment.

use crate::prelude::*;

#[test]
fn check_lists_instrumentations() {
    let temp = Project::empty();
    temp.file("hooks.toml", MINIMAL_MANIFEST);

    temp.hk()
        .args(&["check", "hooks.toml"])
        .passes()
        .stdout_eq("process_action.controller -> log\n1 instrumentation(s) OK\n");
}

#[test]
fn check_shows_logger_names() {
    let temp = Project::empty();
    temp.file(
        "hooks.toml",
        r#"
[[instrumentation]]
name = "sql.record"
action = "log"
logger = "file:logs/sql.log"

[[instrumentation]]
name = "deliver.mail"
action = "print"
"#,
    );

    temp.hk()
        .args(&["check", "hooks.toml"])
        .passes()
        .stdout_has("sql.record -> log [file:logs/sql.log]\n")
        .stdout_has("deliver.mail -> print\n")
        .stdout_has("2 instrumentation(s) OK");
}

#[test]
fn check_does_not_open_file_loggers() {
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

    temp.hk().args(&["check", "hooks.toml"]).passes();

    assert!(!temp.path().join("logs/sql.log").exists());
}

#[test]
fn check_reports_unsubscribe_defaults() {
    let temp = Project::empty();
    temp.file(
        "hooks.toml",
        &format!("unsubscribe_defaults = true\n{}", MINIMAL_MANIFEST),
    );

    temp.hk()
        .args(&["check", "hooks.toml"])
        .passes()
        .stdout_has("Built-in log subscribers will be detached");
}

#[test]
fn check_empty_manifest() {
    let temp = Project::empty();
    temp.file("hooks.toml", "");

    temp.hk()
        .args(&["check", "hooks.toml"])
        .passes()
        .stdout_eq("0 instrumentation(s) OK\n");
}
