// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process log sinks

use super::LogSink;
use std::sync::{Arc, Mutex};
use tracing::Level;

/// Forwards lines to `tracing`, tagged with the sink's name
#[derive(Debug, Clone)]
pub struct TracingSink {
    name: String,
}

impl TracingSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl LogSink for TracingSink {
    fn write(&self, level: Level, message: &str) {
        let logger = self.name.as_str();
        match level {
            Level::ERROR => tracing::error!(logger, "{}", message),
            Level::WARN => tracing::warn!(logger, "{}", message),
            Level::INFO => tracing::info!(logger, "{}", message),
            Level::DEBUG => tracing::debug!(logger, "{}", message),
            Level::TRACE => tracing::trace!(logger, "{}", message),
        }
    }
}

/// Keeps lines in memory; clones share the buffer
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Messages only, in write order
    pub fn messages(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .map(|(_, message)| message)
            .collect()
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: Level, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((level, message.to_string()));
    }
}
