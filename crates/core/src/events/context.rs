// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The context handed to subscribers when an instrumentation point fires

use crate::id::ExecutionId;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use serde_json::Value;

/// Arbitrary event data supplied by the instrumenting code
pub type Payload = serde_json::Map<String, Value>;

/// One firing of an instrumentation point
#[derive(Debug, Clone, Serialize)]
pub struct EventContext {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub execution_id: ExecutionId,
    pub payload: Payload,
}

impl EventContext {
    pub fn duration(&self) -> TimeDelta {
        self.finished_at - self.started_at
    }

    /// Elapsed time in fractional milliseconds
    pub fn duration_ms(&self) -> f64 {
        self.duration()
            .num_microseconds()
            .map_or(0.0, |us| us as f64 / 1000.0)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Payload value rendered for a log line; strings are unquoted
    pub fn field(&self, key: &str) -> Option<String> {
        self.payload.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Event name with a trailing `.<namespace>` removed, if present
    pub fn short_name(&self, namespace: &str) -> &str {
        self.name
            .strip_suffix(namespace)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(&self.name)
    }
}
