// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Actions a manifest can name

use hk_core::{ActionCatalog, ActionError, EventContext, Logger};

/// `log` and `print`
pub fn builtin_actions() -> ActionCatalog {
    let mut catalog = ActionCatalog::new();
    catalog.register_fn("log", log_event);
    catalog.register_fn("print", print_event);
    catalog
}

/// One summary line to the handler's logger, or to tracing without one
fn log_event(event: &EventContext, logger: Option<&Logger>) -> Result<(), ActionError> {
    let line = format!(
        "{} ({:.1}ms) {}",
        event.name,
        event.duration_ms(),
        serde_json::Value::Object(event.payload.clone())
    );
    match logger {
        Some(logger) => logger.info(&line),
        None => tracing::info!(execution_id = %event.execution_id, "{}", line),
    }
    Ok(())
}

/// The whole event as JSON on stdout
fn print_event(event: &EventContext, _logger: Option<&Logger>) -> Result<(), ActionError> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}
