// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Integration tests for manifest-driven hosts.
//!
//! Loads a TOML manifest through the catalogs, boots a host with the built-in
//! subscribers installed, and fires events through the bus.

use hk_core::config::{parse_manifest, resolve};
use hk_core::{
    ActionCatalog, EventBus, FakeClock, FileSink, Host, Logger, LoggerCatalog, MemorySink,
    Payload, SequentialIdGen,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// =============================================================================
// Helpers
// =============================================================================

fn booted(manifest: &str, actions: &ActionCatalog) -> (Host, MemorySink) {
    let configuration =
        resolve(&parse_manifest(manifest).unwrap(), actions, &LoggerCatalog::new()).unwrap();

    let sink = MemorySink::new();
    let mut host = Host::new(EventBus::with_sources(
        FakeClock::new(),
        SequentialIdGen::default(),
    ));
    host.install_defaults(&Logger::new(sink.clone()));
    host.configure(configuration).unwrap();
    host.boot().unwrap();
    (host, sink)
}

fn logging_actions() -> ActionCatalog {
    let mut actions = ActionCatalog::new();
    actions.register_fn("log", |event, logger| {
        if let Some(logger) = logger {
            logger.info(&format!("handled {}", event.name));
        }
        Ok(())
    });
    actions
}

fn payload(json: serde_json::Value) -> Payload {
    match json {
        serde_json::Value::Object(map) => map,
        _ => Payload::new(),
    }
}

// =============================================================================
// Manifest → Host
// =============================================================================

#[test]
fn file_logger_is_created_once_across_events() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs/hooks.log");
    let manifest = format!(
        r#"
[[instrumentation]]
name = "sql.record"
action = "log"
logger = "file:{}"
"#,
        log_path.display()
    );

    let (host, _sink) = booted(&manifest, &logging_actions());
    assert!(!log_path.exists());

    for _ in 0..3 {
        host.bus().instrument("sql.record", Payload::new()).unwrap();
    }

    let records = FileSink::read_all(&log_path).unwrap();
    let sequences: Vec<u64> = records.iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3]);
    assert!(records.iter().all(|r| r.message == "handled sql.record"));
}

#[test]
fn manifest_unsubscribe_keeps_handlers_and_silences_defaults() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut actions = ActionCatalog::new();
    let seen = Arc::clone(&count);
    actions.register_fn("count", move |_, _| {
        seen.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let manifest = r#"
unsubscribe_defaults = true

[[instrumentation]]
name = "process_action.controller"
action = "count"

[[instrumentation]]
name = "deliver.mail"
action = "count"
"#;
    let (host, sink) = booted(manifest, &actions);

    host.bus()
        .instrument(
            "process_action.controller",
            payload(serde_json::json!({ "status": 200 })),
        )
        .unwrap();
    host.bus().instrument("deliver.mail", Payload::new()).unwrap();
    host.bus().instrument("render_template.view", Payload::new()).unwrap();

    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert!(sink.messages().is_empty());
    assert_eq!(host.bus().listener_count(), 2);
}

#[test]
fn defaults_stay_attached_without_unsubscribe() {
    let (host, sink) = booted(
        r#"
[[instrumentation]]
name = "process_action.controller"
action = "log"
"#,
        &logging_actions(),
    );

    host.bus()
        .instrument(
            "process_action.controller",
            payload(serde_json::json!({ "status": 404 })),
        )
        .unwrap();

    assert_eq!(sink.messages(), vec!["Completed 404 in 0.0ms"]);
}
