// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The host's list of live log subscribers

use super::{LogSubscriber, Subscriber};
use crate::category::Category;
use crate::events::{EventBus, EventPattern, ListenerId};
use std::sync::{Arc, RwLock};

/// A log subscriber attached to a bus, with the handle created per pattern
#[derive(Clone)]
pub struct RegisteredSubscriber {
    subscriber: Arc<dyn LogSubscriber>,
    delegate: Arc<dyn Subscriber>,
    handles: Vec<(EventPattern, ListenerId)>,
}

impl RegisteredSubscriber {
    pub fn subscriber(&self) -> &Arc<dyn LogSubscriber> {
        &self.subscriber
    }

    /// The same instance, as the bus sees it
    pub fn delegate(&self) -> &Arc<dyn Subscriber> {
        &self.delegate
    }

    pub fn category(&self) -> &Category {
        self.subscriber.category()
    }

    /// Pattern and bus handle pairs recorded when this subscriber was attached
    pub fn handles(&self) -> &[(EventPattern, ListenerId)] {
        &self.handles
    }

    /// The bus handle this subscriber was registered under for `pattern`
    pub fn handle_for(&self, pattern: &EventPattern) -> Option<ListenerId> {
        self.handles
            .iter()
            .find(|(registered, _)| registered == pattern)
            .map(|(_, id)| *id)
    }
}

/// Every log subscriber the host has attached, in attach order.
///
/// Cloning shares the underlying list.
#[derive(Clone, Default)]
pub struct SubscriberRegistry {
    entries: Arc<RwLock<Vec<RegisteredSubscriber>>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscriber` on the bus under each pattern and record it
    pub fn attach<S>(
        &self,
        bus: &EventBus,
        subscriber: Arc<S>,
        patterns: impl IntoIterator<Item = EventPattern>,
    ) -> Vec<ListenerId>
    where
        S: LogSubscriber + 'static,
    {
        let delegate: Arc<dyn Subscriber> = subscriber.clone();
        let handles: Vec<(EventPattern, ListenerId)> = patterns
            .into_iter()
            .map(|pattern| {
                let id = bus.register(pattern.clone(), Arc::clone(&delegate));
                (pattern, id)
            })
            .collect();

        tracing::debug!(
            category = subscriber.category().name(),
            listeners = handles.len(),
            "log subscriber attached"
        );

        let listeners = handles.iter().map(|(_, id)| *id).collect();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.push(RegisteredSubscriber {
            subscriber,
            delegate,
            handles,
        });
        listeners
    }

    /// Snapshot of the registered subscribers
    pub fn subscribers(&self) -> Vec<RegisteredSubscriber> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Registered subscribers belonging to `category`
    pub fn in_category(&self, category: &Category) -> Vec<RegisteredSubscriber> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|entry| entry.category() == category)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
