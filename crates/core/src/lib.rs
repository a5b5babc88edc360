//! hk-core: Hookline core library
//!
//! Binds user-defined handlers to instrumentation points raised on an
//! [`EventBus`], and detaches built-in log subscribers on request.
//!
//! This crate provides:
//! - The event bus, patterns and event context
//! - Instrumentation configuration (in code or as a TOML manifest)
//! - Handler synthesis with per-type memoized loggers
//! - Built-in log subscribers and identity-scoped detachment
//! - Host startup sequencing

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod clock;
pub mod id;

pub mod category;
pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod events;
pub mod host;
pub mod logger;
pub mod subscriber;
pub mod unsubscribe;

// Re-exports
pub use category::{Category, Origin};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{
    Action, ActionCatalog, ActionError, ConfigError, Configuration, InstrumentationEntry,
    InstrumentationSpec, LoggerCatalog,
};
pub use defaults::{builtin_categories, install_defaults, DefaultLogSubscriber};
pub use dispatch::Dispatcher;
pub use events::{EventBus, EventContext, EventPattern, InstrumentError, Listener, ListenerId, Payload};
pub use host::{BootReport, Host, HostError};
pub use id::{ExecutionId, IdGen, SequentialIdGen, UuidIdGen};
pub use logger::{FileSink, LogSink, Logger, LoggerError, LoggerFactory, MemorySink, TracingSink};
pub use subscriber::{
    HandlerInstance, HandlerType, HandlerTypeId, LogSubscriber, Subscriber, SubscriberError,
    SubscriberFactory, SubscriberRegistry,
};
pub use unsubscribe::{unsubscribe_defaults, DetachReport, UnsubscribeError};
