// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler types synthesized from instrumentation specs

use super::{LogSubscriber, Subscriber, SubscriberError};
use crate::category::Category;
use crate::config::InstrumentationSpec;
use crate::events::EventContext;
use crate::logger::{Logger, LoggerError};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Identity of a synthesized handler type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerTypeId(u64);

impl fmt::Display for HandlerTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler-{}", self.0)
    }
}

/// A handler "type" built from one instrumentation spec.
///
/// All instances share the type's logger slot, so the spec's logger factory
/// runs at most once per type and every instance sees the same `Logger`.
pub struct HandlerType {
    id: HandlerTypeId,
    spec: InstrumentationSpec,
    category: Category,
    logger: Mutex<Option<Logger>>,
}

impl HandlerType {
    fn new(id: HandlerTypeId, spec: InstrumentationSpec) -> Self {
        let category = Category::custom(spec.event_name());
        Self {
            id,
            spec,
            category,
            logger: Mutex::new(None),
        }
    }

    pub fn id(&self) -> HandlerTypeId {
        self.id
    }

    pub fn spec(&self) -> &InstrumentationSpec {
        &self.spec
    }

    /// The event name this type dispatches on
    pub fn event_name(&self) -> &str {
        self.spec.event_name()
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The memoized logger, creating it on first access.
    ///
    /// The slot lock is held across the factory call so racing first
    /// accesses converge on a single logger. A failed factory leaves the
    /// slot empty and the error is returned to the caller.
    pub fn logger(&self) -> Result<Option<Logger>, LoggerError> {
        let Some(factory) = self.spec.logger_factory() else {
            return Ok(None);
        };

        let mut slot = self.logger.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(logger) = slot.as_ref() {
            return Ok(Some(logger.clone()));
        }

        let logger = factory.create()?;
        tracing::debug!(handler = %self.id, event = self.event_name(), "logger created");
        *slot = Some(logger.clone());
        Ok(Some(logger))
    }

    /// Create a new instance of this type
    pub fn instantiate(self: &Arc<Self>) -> Arc<HandlerInstance> {
        Arc::new(HandlerInstance {
            handler_type: Arc::clone(self),
        })
    }

    fn dispatch(&self, event: &EventContext) -> Result<(), SubscriberError> {
        let logger = self.logger()?;
        self.spec
            .action()
            .run(event, logger.as_ref())
            .map_err(|source| SubscriberError::Action {
                event: event.name.clone(),
                source,
            })
    }
}

impl fmt::Debug for HandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerType")
            .field("id", &self.id)
            .field("event_name", &self.event_name())
            .finish_non_exhaustive()
    }
}

/// One registered handler; all state lives on its [`HandlerType`]
pub struct HandlerInstance {
    handler_type: Arc<HandlerType>,
}

impl HandlerInstance {
    pub fn handler_type(&self) -> &Arc<HandlerType> {
        &self.handler_type
    }
}

impl Subscriber for HandlerInstance {
    fn call(&self, event: &EventContext) -> Result<(), SubscriberError> {
        self.handler_type.dispatch(event)
    }
}

impl LogSubscriber for HandlerInstance {
    fn category(&self) -> &Category {
        self.handler_type.category()
    }

    fn logger(&self) -> Result<Option<Logger>, LoggerError> {
        self.handler_type.logger()
    }
}

/// Builds handler types from specs and remembers them by identity
#[derive(Default)]
pub struct SubscriberFactory {
    types: RwLock<HashMap<HandlerTypeId, Arc<HandlerType>>>,
    next_id: AtomicU64,
}

impl SubscriberFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesize a fresh handler type for `spec`
    pub fn synthesize(&self, spec: &InstrumentationSpec) -> Arc<HandlerType> {
        let id = HandlerTypeId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let handler_type = Arc::new(HandlerType::new(id, spec.clone()));

        let mut types = self.types.write().unwrap_or_else(|e| e.into_inner());
        types.insert(id, Arc::clone(&handler_type));
        handler_type
    }

    pub fn get(&self, id: HandlerTypeId) -> Option<Arc<HandlerType>> {
        self.types
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
    }

    /// Number of types synthesized so far
    pub fn len(&self) -> usize {
        self.types.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
