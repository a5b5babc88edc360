// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for routing instrumented events to subscribers

use super::context::{EventContext, Payload};
use super::pattern::EventPattern;
use crate::clock::{Clock, SystemClock};
use crate::id::{IdGen, UuidIdGen};
use crate::subscriber::{Subscriber, SubscriberError};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Handle returned by [`EventBus::register`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// A registered subscriber together with the pattern it was registered under
#[derive(Clone)]
pub struct Listener {
    id: ListenerId,
    pattern: EventPattern,
    delegate: Arc<dyn Subscriber>,
}

impl Listener {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn pattern(&self) -> &EventPattern {
        &self.pattern
    }

    /// The subscriber this listener wraps
    pub fn delegate(&self) -> &Arc<dyn Subscriber> {
        &self.delegate
    }

    /// Identity check against another subscriber handle
    pub fn is_delegate(&self, subscriber: &Arc<dyn Subscriber>) -> bool {
        Arc::ptr_eq(&self.delegate, subscriber)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// One or more subscribers failed while handling an event.
///
/// Every matching subscriber still runs; failures are collected.
#[derive(Debug, Error)]
#[error("{} subscriber(s) failed handling '{event}'", .errors.len())]
pub struct InstrumentError {
    pub event: String,
    pub errors: Vec<SubscriberError>,
}

/// The event bus routes instrumented events to matching subscribers
pub struct EventBus {
    listeners: Arc<RwLock<BTreeMap<ListenerId, Listener>>>,
    next_id: Arc<AtomicU64>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGen>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_sources(SystemClock, UuidIdGen)
    }

    /// Create a bus with explicit time and execution-id sources
    pub fn with_sources(clock: impl Clock + 'static, ids: impl IdGen + 'static) -> Self {
        Self {
            listeners: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            clock: Arc::new(clock),
            ids: Arc::new(ids),
        }
    }

    /// Register a subscriber for events matching `pattern`
    pub fn register(
        &self,
        pattern: impl Into<EventPattern>,
        delegate: Arc<dyn Subscriber>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let pattern = pattern.into();
        tracing::trace!(%id, %pattern, "registering listener");

        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        listeners.insert(
            id,
            Listener {
                id,
                pattern,
                delegate,
            },
        );
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unregister(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        listeners.remove(&id).is_some()
    }

    /// Listeners whose pattern matches `event_name`, in registration order
    pub fn listeners_for(&self, event_name: &str) -> Vec<Listener> {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .filter(|listener| listener.pattern.matches(event_name))
            .cloned()
            .collect()
    }

    /// True if any listener would receive `event_name`
    pub fn is_listening(&self, event_name: &str) -> bool {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .any(|listener| listener.pattern.matches(event_name))
    }

    /// Get count of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Fire an instantaneous event
    pub fn instrument(&self, name: &str, payload: Payload) -> Result<(), InstrumentError> {
        self.instrument_with(name, payload, |_| ())
    }

    /// Time `work`, then deliver the event to every matching listener.
    ///
    /// `work` may add entries to the payload before it is delivered.
    pub fn instrument_with<R>(
        &self,
        name: &str,
        mut payload: Payload,
        work: impl FnOnce(&mut Payload) -> R,
    ) -> Result<R, InstrumentError> {
        let started_at = self.clock.now();
        let result = work(&mut payload);
        let finished_at = self.clock.now();

        let event = EventContext {
            name: name.to_string(),
            started_at,
            finished_at,
            execution_id: self.ids.next(),
            payload,
        };

        // Snapshot so subscribers may touch the bus while handling
        let listeners = self.listeners_for(name);
        let mut errors = Vec::new();
        for listener in &listeners {
            if let Err(e) = listener.delegate.call(&event) {
                tracing::warn!(
                    event = %event.name,
                    listener = %listener.id,
                    error = %e,
                    "subscriber failed"
                );
                errors.push(e);
            }
        }

        if errors.is_empty() {
            Ok(result)
        } else {
            Err(InstrumentError {
                event: event.name,
                errors,
            })
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
            next_id: Arc::clone(&self.next_id),
            clock: Arc::clone(&self.clock),
            ids: Arc::clone(&self.ids),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
