// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attaching configured handlers to the bus

use crate::config::Configuration;
use crate::events::{EventBus, EventPattern};
use crate::subscriber::{HandlerInstance, SubscriberFactory, SubscriberRegistry};
use std::sync::Arc;

/// Turns a configuration into registered handlers
#[derive(Default)]
pub struct Dispatcher {
    factory: SubscriberFactory,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factory(&self) -> &SubscriberFactory {
        &self.factory
    }

    /// Synthesize, instantiate and register one handler per spec, in order.
    ///
    /// Each handler is registered under exactly its spec's event name. An
    /// empty configuration registers nothing.
    pub fn attach(
        &self,
        configuration: &Configuration,
        bus: &EventBus,
        registry: &SubscriberRegistry,
    ) -> Vec<Arc<HandlerInstance>> {
        let instances: Vec<Arc<HandlerInstance>> = configuration
            .instrumentations
            .iter()
            .map(|spec| {
                let handler_type = self.factory.synthesize(spec);
                let instance = handler_type.instantiate();
                let pattern = EventPattern::new(spec.event_name());
                registry.attach(bus, Arc::clone(&instance), [pattern]);
                tracing::debug!(
                    handler = %handler_type.id(),
                    event = spec.event_name(),
                    "instrumentation attached"
                );
                instance
            })
            .collect();

        if !instances.is_empty() {
            tracing::info!(count = instances.len(), "attached instrumentations");
        }
        instances
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
