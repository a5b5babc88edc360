// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup sequencing for a host application
//!
//! ```text
//! Host::new(bus) → install_defaults → configure → boot (attach → detach?)
//! ```
//!
//! Each step runs once. After `boot` the bus is in its steady state.

use crate::config::Configuration;
use crate::defaults::{self, DefaultLogSubscriber};
use crate::dispatch::Dispatcher;
use crate::events::EventBus;
use crate::logger::Logger;
use crate::subscriber::{HandlerInstance, SubscriberRegistry};
use crate::unsubscribe::{unsubscribe_defaults, DetachReport, UnsubscribeError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("instrumentation configuration was already set")]
    AlreadyConfigured,

    #[error("host was already booted")]
    AlreadyBooted,

    #[error(transparent)]
    Unsubscribe(#[from] UnsubscribeError),
}

/// What `boot` did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootReport {
    pub attached: usize,
    /// `None` when defaults were left in place
    pub detached: Option<DetachReport>,
}

/// Owns the bus wiring for one application
pub struct Host {
    bus: EventBus,
    registry: SubscriberRegistry,
    dispatcher: Dispatcher,
    configuration: Option<Configuration>,
    defaults: Vec<Arc<DefaultLogSubscriber>>,
    handlers: Vec<Arc<HandlerInstance>>,
    booted: bool,
}

impl Host {
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            registry: SubscriberRegistry::new(),
            dispatcher: Dispatcher::new(),
            configuration: None,
            defaults: Vec::new(),
            handlers: Vec::new(),
            booted: false,
        }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn registry(&self) -> &SubscriberRegistry {
        &self.registry
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn configuration(&self) -> Option<&Configuration> {
        self.configuration.as_ref()
    }

    pub fn defaults(&self) -> &[Arc<DefaultLogSubscriber>] {
        &self.defaults
    }

    /// Handlers attached by `boot`
    pub fn handlers(&self) -> &[Arc<HandlerInstance>] {
        &self.handlers
    }

    /// Attach the built-in log subscribers, writing to `logger`
    pub fn install_defaults(&mut self, logger: &Logger) -> &[Arc<DefaultLogSubscriber>] {
        let installed = defaults::install_defaults(&self.bus, &self.registry, logger);
        self.defaults.extend(installed);
        &self.defaults
    }

    /// Set the instrumentation configuration; allowed once
    pub fn configure(&mut self, configuration: Configuration) -> Result<(), HostError> {
        if self.configuration.is_some() {
            return Err(HostError::AlreadyConfigured);
        }
        self.configuration = Some(configuration);
        Ok(())
    }

    /// Attach configured handlers, then detach defaults if asked to.
    ///
    /// Booting without a configuration attaches nothing.
    pub fn boot(&mut self) -> Result<BootReport, HostError> {
        if self.booted {
            return Err(HostError::AlreadyBooted);
        }
        self.booted = true;

        let configuration = self.configuration.clone().unwrap_or_default();
        self.handlers = self
            .dispatcher
            .attach(&configuration, &self.bus, &self.registry);

        let detached = if configuration.unsubscribe_defaults {
            Some(unsubscribe_defaults(
                &self.bus,
                &self.registry,
                &defaults::builtin_categories(),
            )?)
        } else {
            None
        };

        tracing::info!(
            attached = self.handlers.len(),
            listeners = self.bus.listener_count(),
            "host booted"
        );

        Ok(BootReport {
            attached: self.handlers.len(),
            detached,
        })
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
