// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in log subscribers
//!
//! One subscriber per category, each writing a one-line summary of the events
//! it understands. These are what `unsubscribe_defaults` detaches.

use crate::category::Category;
use crate::events::{EventBus, EventContext};
use crate::logger::{Logger, LoggerError};
use crate::subscriber::{LogSubscriber, Subscriber, SubscriberError, SubscriberRegistry};
use std::sync::Arc;
use tracing::Level;

pub fn view() -> Category {
    Category::builtin(
        "view",
        "view",
        &["render_template", "render_partial", "render_collection"],
    )
}

pub fn controller() -> Category {
    Category::builtin(
        "controller",
        "controller",
        &[
            "start_processing",
            "process_action",
            "redirect_to",
            "send_file",
            "halted_callback",
        ],
    )
}

pub fn record() -> Category {
    Category::builtin("record", "record", &["sql"])
}

pub fn mail() -> Category {
    Category::builtin("mail", "mail", &["deliver", "receive", "process"])
}

/// Every built-in category, in install order
pub fn builtin_categories() -> Vec<Category> {
    vec![view(), controller(), record(), mail()]
}

/// The stock log subscriber for one built-in category
pub struct DefaultLogSubscriber {
    category: Category,
    logger: Logger,
}

impl DefaultLogSubscriber {
    pub fn new(category: Category, logger: Logger) -> Self {
        Self { category, logger }
    }

    /// Register on every pattern of the category and record in `registry`
    pub fn attach_to(self, bus: &EventBus, registry: &SubscriberRegistry) -> Arc<Self> {
        let patterns = self.category.patterns();
        let subscriber = Arc::new(self);
        registry.attach(bus, Arc::clone(&subscriber), patterns);
        subscriber
    }

    fn describe(&self, event: &EventContext) -> Option<(Level, String)> {
        let ms = event.duration_ms();
        let field = |key: &str| event.field(key).unwrap_or_else(|| "?".to_string());

        let line = match (self.category.namespace(), event.short_name(self.category.namespace())) {
            ("view", "render_template" | "render_partial") => {
                format!("Rendered {} ({:.1}ms)", field("identifier"), ms)
            }
            ("view", "render_collection") => format!(
                "Rendered collection of {} [{} times] ({:.1}ms)",
                field("identifier"),
                field("count"),
                ms
            ),
            ("controller", "start_processing") => format!(
                "Processing by {}#{} as {}",
                field("controller"),
                field("action"),
                field("format")
            ),
            ("controller", "process_action") => {
                format!("Completed {} in {:.1}ms", field("status"), ms)
            }
            ("controller", "redirect_to") => format!("Redirected to {}", field("location")),
            ("controller", "send_file") => format!("Sent file {} ({:.1}ms)", field("path"), ms),
            ("controller", "halted_callback") => format!(
                "Filter chain halted as {} rendered or redirected",
                field("filter")
            ),
            ("record", "sql") => {
                let line = format!("{} ({:.1}ms)  {}", field("name"), ms, field("sql"));
                return Some((Level::DEBUG, line));
            }
            ("mail", "deliver") => {
                format!("Delivered mail {} ({:.1}ms)", field("message_id"), ms)
            }
            ("mail", "receive") => format!("Received mail {} ({:.1}ms)", field("message_id"), ms),
            ("mail", "process") => format!(
                "{}#{}: processed outbound mail in {:.1}ms",
                field("mailer"),
                field("action"),
                ms
            ),
            _ => return None,
        };
        Some((Level::INFO, line))
    }
}

impl Subscriber for DefaultLogSubscriber {
    fn call(&self, event: &EventContext) -> Result<(), SubscriberError> {
        if let Some((level, line)) = self.describe(event) {
            self.logger.log(level, &line);
        }
        Ok(())
    }
}

impl LogSubscriber for DefaultLogSubscriber {
    fn category(&self) -> &Category {
        &self.category
    }

    fn logger(&self) -> Result<Option<Logger>, LoggerError> {
        Ok(Some(self.logger.clone()))
    }
}

/// Attach one default subscriber per built-in category, all sharing `logger`
pub fn install_defaults(
    bus: &EventBus,
    registry: &SubscriberRegistry,
    logger: &Logger,
) -> Vec<Arc<DefaultLogSubscriber>> {
    builtin_categories()
        .into_iter()
        .map(|category| DefaultLogSubscriber::new(category, logger.clone()).attach_to(bus, registry))
        .collect()
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
