// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named actions and loggers a manifest can refer to

use super::spec::{Action, ActionError};
use crate::events::EventContext;
use crate::logger::{FileSink, Logger, LoggerError, LoggerFactory, TracingSink};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Actions available to a manifest, by name
#[derive(Clone, Default)]
pub struct ActionCatalog {
    actions: BTreeMap<String, Arc<dyn Action>>,
}

impl ActionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, action: Arc<dyn Action>) -> &mut Self {
        self.actions.insert(name.into(), action);
        self
    }

    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&EventContext, Option<&Logger>) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.register(name, Arc::new(f))
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }
}

/// Loggers available to a manifest, by name.
///
/// Besides registered names, two schemes are always understood:
/// - `tracing` or `tracing:<name>` - forward to `tracing`
/// - `file:<path>` - append JSON lines to `<path>`
#[derive(Clone, Default)]
pub struct LoggerCatalog {
    factories: BTreeMap<String, Arc<dyn LoggerFactory>>,
}

impl LoggerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: Arc<dyn LoggerFactory>,
    ) -> &mut Self {
        self.factories.insert(name.into(), factory);
        self
    }

    /// Look up a registered factory, then the built-in schemes
    pub fn get(&self, name: &str) -> Option<Arc<dyn LoggerFactory>> {
        if let Some(factory) = self.factories.get(name) {
            return Some(Arc::clone(factory));
        }

        if name == "tracing" {
            return Some(tracing_factory("hooks"));
        }
        if let Some(sink_name) = name.strip_prefix("tracing:").filter(|n| !n.is_empty()) {
            return Some(tracing_factory(sink_name));
        }
        if let Some(path) = name.strip_prefix("file:").filter(|p| !p.is_empty()) {
            let path = PathBuf::from(path);
            return Some(Arc::new(move || -> Result<Logger, LoggerError> {
                let sink = FileSink::open(path.clone())?;
                tracing::debug!(path = %sink.path().display(), "file logger opened");
                Ok(Logger::new(sink))
            }));
        }
        None
    }
}

fn tracing_factory(name: &str) -> Arc<dyn LoggerFactory> {
    let name = name.to_string();
    Arc::new(move || -> Result<Logger, LoggerError> {
        Ok(Logger::new(TracingSink::new(name.clone())))
    })
}
