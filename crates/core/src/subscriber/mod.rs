// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscribers: what the bus delivers events to
//!
//! - `Subscriber` - anything that can handle a fired event
//! - `LogSubscriber` - a subscriber that belongs to a category and owns a logger
//! - `SubscriberFactory` / `HandlerType` - handlers synthesized from configuration
//! - `SubscriberRegistry` - the host's list of live log subscribers

mod handler;
mod registry;

pub use handler::{HandlerInstance, HandlerType, HandlerTypeId, SubscriberFactory};
pub use registry::{RegisteredSubscriber, SubscriberRegistry};

use crate::category::Category;
use crate::config::ActionError;
use crate::events::EventContext;
use crate::logger::{Logger, LoggerError};
use thiserror::Error;

/// Errors raised while a subscriber handles an event
#[derive(Debug, Error)]
pub enum SubscriberError {
    #[error("action for '{event}' failed: {source}")]
    Action {
        event: String,
        #[source]
        source: ActionError,
    },

    #[error(transparent)]
    Logger(#[from] LoggerError),
}

/// Anything the bus can deliver an event to
pub trait Subscriber: Send + Sync {
    fn call(&self, event: &EventContext) -> Result<(), SubscriberError>;
}

/// A subscriber that reports through a logger and belongs to a category
pub trait LogSubscriber: Subscriber {
    fn category(&self) -> &Category;

    /// The logger this subscriber writes to; `None` when it has none
    fn logger(&self) -> Result<Option<Logger>, LoggerError>;
}
