//! CLI error specs
//!
//! Verify invalid manifests and failing handlers exit non-zero with a message.

use crate::prelude::*;

#[test]
fn missing_manifest_fails() {
    let temp = Project::empty();

    temp.hk()
        .args(&["check", "nope.toml"])
        .fails()
        .stderr_has("IO error reading");
}

#[test]
fn malformed_toml_fails() {
    let temp = Project::empty();
    temp.file("hooks.toml", "[[instrumentation]\nname = ");

    temp.hk()
        .args(&["check", "hooks.toml"])
        .fails()
        .stderr_has("TOML syntax error");
}

#[test]
fn unknown_action_fails() {
    let temp = Project::empty();
    temp.file(
        "hooks.toml",
        r#"
[[instrumentation]]
name = "sql.record"
action = "shout"
"#,
    );

    temp.hk()
        .args(&["check", "hooks.toml"])
        .fails()
        .stderr_has("unknown action 'shout'");
}

#[test]
fn unknown_logger_fails() {
    let temp = Project::empty();
    temp.file(
        "hooks.toml",
        r#"
[[instrumentation]]
name = "sql.record"
action = "log"
logger = "syslog"
"#,
    );

    temp.hk()
        .args(&["check", "hooks.toml"])
        .fails()
        .stderr_has("unknown logger 'syslog'");
}

#[test]
fn missing_name_fails() {
    let temp = Project::empty();
    temp.file("hooks.toml", "[[instrumentation]]\naction = \"log\"\n");

    temp.hk()
        .args(&["check", "hooks.toml"])
        .fails()
        .stderr_has("missing an event name");
}

#[test]
fn missing_action_fails() {
    let temp = Project::empty();
    temp.file("hooks.toml", "[[instrumentation]]\nname = \"sql.record\"\n");

    temp.hk()
        .args(&["check", "hooks.toml"])
        .fails()
        .stderr_has("'sql.record' (#0) is missing an action");
}

#[test]
fn invalid_event_name_fails() {
    let temp = Project::empty();
    temp.file(
        "hooks.toml",
        "[[instrumentation]]\nname = \"sql..record\"\naction = \"log\"\n",
    );

    temp.hk()
        .args(&["check", "hooks.toml"])
        .fails()
        .stderr_has("invalid event name 'sql..record'");
}

#[test]
fn non_object_payload_fails() {
    let temp = Project::empty();
    temp.file("hooks.toml", MINIMAL_MANIFEST);

    temp.hk()
        .args(&[
            "fire",
            "hooks.toml",
            "process_action.controller",
            "--payload",
            "[1, 2]",
        ])
        .fails()
        .stderr_has("payload must be a JSON object");
}

#[test]
fn failing_logger_fails_fire() {
    let temp = Project::empty();
    temp.file("logs/keep", "");
    temp.file(
        "hooks.toml",
        r#"
[[instrumentation]]
name = "sql.record"
action = "log"
logger = "file:logs"
"#,
    );

    temp.hk()
        .args(&["fire", "hooks.toml", "sql.record"])
        .fails()
        .stderr_has("1 subscriber(s) failed handling 'sql.record'");
}
