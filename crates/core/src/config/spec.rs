// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instrumentation specs and their validation

use super::ConfigError;
use crate::events::EventContext;
use crate::logger::{Logger, LoggerError, LoggerFactory};
use std::fmt;
use std::sync::Arc;

/// Error type user actions return
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// User code run when an instrumentation point fires.
///
/// `logger` is `None` when the spec has no logger factory.
pub trait Action: Send + Sync {
    fn run(&self, event: &EventContext, logger: Option<&Logger>) -> Result<(), ActionError>;
}

impl<F> Action for F
where
    F: Fn(&EventContext, Option<&Logger>) -> Result<(), ActionError> + Send + Sync,
{
    fn run(&self, event: &EventContext, logger: Option<&Logger>) -> Result<(), ActionError> {
        self(event, logger)
    }
}

/// Wrap a closure as a shareable action
pub fn action<F>(f: F) -> Arc<dyn Action>
where
    F: Fn(&EventContext, Option<&Logger>) -> Result<(), ActionError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A validated event/action/logger triple
#[derive(Clone)]
pub struct InstrumentationSpec {
    event_name: String,
    action: Arc<dyn Action>,
    logger_factory: Option<Arc<dyn LoggerFactory>>,
}

impl InstrumentationSpec {
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn action(&self) -> &Arc<dyn Action> {
        &self.action
    }

    pub fn logger_factory(&self) -> Option<&Arc<dyn LoggerFactory>> {
        self.logger_factory.as_ref()
    }
}

impl fmt::Debug for InstrumentationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentationSpec")
            .field("event_name", &self.event_name)
            .field("has_logger", &self.logger_factory.is_some())
            .finish_non_exhaustive()
    }
}

/// An unvalidated instrumentation entry, as a host declares it
#[derive(Clone, Default)]
pub struct InstrumentationEntry {
    pub name: Option<String>,
    pub action: Option<Arc<dyn Action>>,
    pub logger: Option<Arc<dyn LoggerFactory>>,
}

impl InstrumentationEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn action<F>(self, f: F) -> Self
    where
        F: Fn(&EventContext, Option<&Logger>) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.with_action(Arc::new(f))
    }

    pub fn with_action(mut self, action: Arc<dyn Action>) -> Self {
        self.action = Some(action);
        self
    }

    pub fn logger<F>(self, f: F) -> Self
    where
        F: Fn() -> Result<Logger, LoggerError> + Send + Sync + 'static,
    {
        self.with_logger(Arc::new(f))
    }

    pub fn with_logger(mut self, factory: Arc<dyn LoggerFactory>) -> Self {
        self.logger = Some(factory);
        self
    }
}

/// Instrumentation settings the host reads once at startup
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub instrumentations: Vec<InstrumentationSpec>,
    /// Detach the built-in log subscribers after attaching
    pub unsubscribe_defaults: bool,
}

impl Configuration {
    pub fn new(instrumentations: Vec<InstrumentationSpec>) -> Self {
        Self {
            instrumentations,
            unsubscribe_defaults: false,
        }
    }

    /// Validate `entries` into a configuration
    pub fn load(
        entries: impl IntoIterator<Item = InstrumentationEntry>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(load(entries)?))
    }

    pub fn with_unsubscribe_defaults(mut self, unsubscribe: bool) -> Self {
        self.unsubscribe_defaults = unsubscribe;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.instrumentations.is_empty()
    }
}

/// Validate entries in order, failing on the first bad one
pub fn load(
    entries: impl IntoIterator<Item = InstrumentationEntry>,
) -> Result<Vec<InstrumentationSpec>, ConfigError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let name = entry.name.ok_or(ConfigError::MissingName { index })?;
            if name.is_empty() {
                return Err(ConfigError::MissingName { index });
            }
            if !is_valid_event_name(&name) {
                return Err(ConfigError::InvalidName { index, name });
            }
            let Some(action) = entry.action else {
                return Err(ConfigError::MissingAction { index, name });
            };
            Ok(InstrumentationSpec {
                event_name: name,
                action,
                logger_factory: entry.logger,
            })
        })
        .collect()
}

/// Non-empty dot-separated segments, no whitespace, no wildcard segments
fn is_valid_event_name(name: &str) -> bool {
    !name.chars().any(char::is_whitespace)
        && name
            .split('.')
            .all(|segment| !segment.is_empty() && segment != "*" && segment != "**")
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
