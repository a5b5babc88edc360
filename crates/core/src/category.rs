// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log subscriber categories
//!
//! A category groups the instrumentation points one subscriber handles under
//! a namespace token. Built-in categories register as `<event>.<namespace>`.

use crate::events::EventPattern;

/// Where a category comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Shipped default log subscribers; eligible for detachment
    BuiltIn,
    /// Handlers synthesized from configuration
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    name: String,
    namespace: String,
    events: Vec<String>,
    origin: Origin,
}

impl Category {
    /// A built-in category handling `events` under `namespace`
    pub fn builtin(name: &str, namespace: &str, events: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            events: events.iter().map(|e| e.to_string()).collect(),
            origin: Origin::BuiltIn,
        }
    }

    /// Category for a handler synthesized for one event name
    pub fn custom(event_name: &str) -> Self {
        Self {
            name: event_name.to_string(),
            namespace: String::new(),
            events: Vec::new(),
            origin: Origin::Custom,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_builtin(&self) -> bool {
        self.origin == Origin::BuiltIn
    }

    /// Declared event names, first occurrence wins
    pub fn events(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for event in &self.events {
            if !seen.contains(&event.as_str()) {
                seen.push(event.as_str());
            }
        }
        seen
    }

    /// Bus pattern for one of this category's events
    pub fn pattern_for(&self, event: &str) -> EventPattern {
        EventPattern::from(format!("{}.{}", event, self.namespace))
    }

    /// Bus patterns for every declared event
    pub fn patterns(&self) -> Vec<EventPattern> {
        self.events()
            .into_iter()
            .map(|event| self.pattern_for(event))
            .collect()
    }
}
