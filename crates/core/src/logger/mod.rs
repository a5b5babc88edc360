// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loggers handed to subscribers
//!
//! A `Logger` is an opaque, cheaply cloned handle to a `LogSink`. Subscribers
//! only write through it. Identity is the sink allocation: two handles are the
//! same logger when [`Logger::ptr_eq`] holds.

mod file;
mod sinks;

pub use file::{FileSink, LogRecord};
pub use sinks::{MemorySink, TracingSink};

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::Level;

/// Errors creating a logger
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logger initialization failed: {0}")]
    Init(String),
}

/// Destination for log lines
pub trait LogSink: Send + Sync {
    fn write(&self, level: Level, message: &str);
}

/// Shared handle to a log sink
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    pub fn log(&self, level: Level, message: &str) {
        self.sink.write(level, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }

    /// True if both handles point at the same sink
    pub fn ptr_eq(a: &Logger, b: &Logger) -> bool {
        Arc::ptr_eq(&a.sink, &b.sink)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logger({:p})", Arc::as_ptr(&self.sink).cast::<()>())
    }
}

/// Creates a logger on demand
pub trait LoggerFactory: Send + Sync {
    fn create(&self) -> Result<Logger, LoggerError>;
}

impl<F> LoggerFactory for F
where
    F: Fn() -> Result<Logger, LoggerError> + Send + Sync,
{
    fn create(&self) -> Result<Logger, LoggerError> {
        self()
    }
}

/// Wrap a closure as a shareable logger factory
pub fn logger_factory<F>(f: F) -> Arc<dyn LoggerFactory>
where
    F: Fn() -> Result<Logger, LoggerError> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
