// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML manifests for instrumentation configuration.
//!
//! ```toml
//! unsubscribe_defaults = false
//!
//! [[instrumentation]]
//! name = "process_action.controller"
//! action = "log"
//! logger = "file:log/instrumentation.log"
//! ```
//!
//! Parsing is purely syntactic. Action and logger names are looked up in
//! catalogs by [`resolve`], then the entries go through [`load`](super::load).

use super::catalog::{ActionCatalog, LoggerCatalog};
use super::spec::{Configuration, InstrumentationEntry};
use super::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Manifest mirroring the TOML structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawManifest {
    pub unsubscribe_defaults: bool,
    pub instrumentation: Vec<RawInstrumentation>,
}

/// One `[[instrumentation]]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawInstrumentation {
    pub name: Option<String>,
    pub action: Option<String>,
    pub logger: Option<String>,
}

/// Parse a manifest from TOML string content
pub fn parse_manifest(toml_content: &str) -> Result<RawManifest, ConfigError> {
    let manifest: RawManifest = toml::from_str(toml_content)?;
    Ok(manifest)
}

/// Parse a manifest from a TOML file
pub fn parse_manifest_file(path: &Path) -> Result<RawManifest, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_manifest(&content)
}

/// Resolve names through the catalogs and validate the result
pub fn resolve(
    raw: &RawManifest,
    actions: &ActionCatalog,
    loggers: &LoggerCatalog,
) -> Result<Configuration, ConfigError> {
    let mut entries = Vec::with_capacity(raw.instrumentation.len());

    for (index, item) in raw.instrumentation.iter().enumerate() {
        let mut entry = InstrumentationEntry {
            name: item.name.clone(),
            ..InstrumentationEntry::default()
        };

        if let Some(name) = &item.action {
            let action = actions.get(name).ok_or_else(|| ConfigError::UnknownAction {
                index,
                action: name.clone(),
            })?;
            entry = entry.with_action(action);
        }

        if let Some(name) = &item.logger {
            let factory = loggers.get(name).ok_or_else(|| ConfigError::UnknownLogger {
                index,
                logger: name.clone(),
            })?;
            entry = entry.with_logger(factory);
        }

        entries.push(entry);
    }

    Ok(Configuration::load(entries)?.with_unsubscribe_defaults(raw.unsubscribe_defaults))
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
