// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Detaching built-in log subscribers from the bus
//!
//! Each registered subscriber carries the bus handle it received per pattern.
//! Detaching looks up the handle for every `<event>.<namespace>` pattern of
//! the category and unregisters exactly that handle. Other listeners at the
//! same pattern, including custom handlers and unregistered instances of the
//! same category, stay registered. Detachment is permanent.

use crate::category::Category;
use crate::events::EventBus;
use crate::subscriber::SubscriberRegistry;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnsubscribeError {
    #[error("expected '{category}' to be a built-in log subscriber category")]
    UnsupportedCategory { category: String },
}

/// Listeners removed per category name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetachReport {
    removed: BTreeMap<String, usize>,
}

impl DetachReport {
    pub fn removed_for(&self, category: &str) -> usize {
        self.removed.get(category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.removed.values().sum()
    }
}

/// Remove every bus listener belonging to a registered subscriber of the
/// given built-in categories.
///
/// All categories are checked before the bus is touched.
pub fn unsubscribe_defaults(
    bus: &EventBus,
    registry: &SubscriberRegistry,
    categories: &[Category],
) -> Result<DetachReport, UnsubscribeError> {
    if let Some(category) = categories.iter().find(|c| !c.is_builtin()) {
        return Err(UnsubscribeError::UnsupportedCategory {
            category: category.name().to_string(),
        });
    }

    let mut report = DetachReport::default();
    for entry in registry.subscribers() {
        let category = entry.category();
        if !categories.contains(category) {
            continue;
        }

        let mut removed = 0;
        for pattern in category.patterns() {
            let Some(id) = entry.handle_for(&pattern) else {
                continue;
            };
            if bus.unregister(id) {
                tracing::debug!(
                    category = category.name(),
                    %pattern,
                    listener = %id,
                    "detached default listener"
                );
                removed += 1;
            }
        }
        *report.removed.entry(category.name().to_string()).or_default() += removed;
    }

    tracing::info!(removed = report.total(), "unsubscribed default log subscribers");
    Ok(report)
}

#[cfg(test)]
#[path = "unsubscribe_tests.rs"]
mod tests;
