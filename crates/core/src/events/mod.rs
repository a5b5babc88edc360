// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system: the bus instrumentation points are raised on
//!
//! This module provides:
//! - `EventBus` - Route fired events to listeners by pattern
//! - `EventPattern` - Dotted pattern matching for registrations
//! - `EventContext` - What a subscriber sees when an event fires

mod bus;
mod context;
mod pattern;

pub use bus::{EventBus, InstrumentError, Listener, ListenerId};
pub use context::{EventContext, Payload};
pub use pattern::EventPattern;
