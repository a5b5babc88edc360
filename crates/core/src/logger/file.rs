// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-lines file sink

use super::{LogSink, LoggerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// A logged line with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Monotonic sequence number within the file
    pub sequence: u64,
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub message: String,
}

struct FileState {
    file: File,
    sequence: u64,
}

/// Appends one JSON record per line to a file
pub struct FileSink {
    path: PathBuf,
    state: Mutex<FileState>,
}

impl FileSink {
    /// Open or create a log file, creating parent directories
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LoggerError> {
        let path = path.into();
        let io_err = |source| LoggerError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        // Continue numbering after existing entries
        let sequence = if path.exists() {
            let file = File::open(&path).map_err(io_err)?;
            BufReader::new(file).lines().map_while(Result::ok).count() as u64
        } else {
            0
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err)?;

        Ok(Self {
            path,
            state: Mutex::new(FileState { file, sequence }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record from a log file
    pub fn read_all(path: &Path) -> std::io::Result<Vec<LogRecord>> {
        if !path.exists() {
            return Ok(vec![]);
        }

        let file = File::open(path)?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: LogRecord = serde_json::from_str(&line)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            records.push(record);
        }
        Ok(records)
    }
}

impl LogSink for FileSink {
    fn write(&self, level: Level, message: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.sequence += 1;

        let record = LogRecord {
            sequence: state.sequence,
            timestamp: Utc::now(),
            level: level.to_string(),
            message: message.to_string(),
        };

        let written = serde_json::to_string(&record)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            .and_then(|json| writeln!(state.file, "{}", json));
        if let Err(e) = written {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write log record");
        }
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
