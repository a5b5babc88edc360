// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instrumentation configuration
//!
//! - **spec**: `InstrumentationSpec`, `Configuration` and validation (`load`)
//! - **manifest**: TOML form of the configuration
//! - **catalog**: name → action / logger lookups used by the manifest
//!
//! ```text
//! TOML → parse_manifest → RawManifest → resolve (catalogs) → entries → load → Configuration
//! ```

mod catalog;
mod manifest;
mod spec;

pub use catalog::{ActionCatalog, LoggerCatalog};
pub use manifest::{parse_manifest, parse_manifest_file, resolve, RawInstrumentation, RawManifest};
pub use spec::{
    action, load, Action, ActionError, Configuration, InstrumentationEntry, InstrumentationSpec,
};

use thiserror::Error;

/// Errors loading instrumentation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("instrumentation #{index} is missing an event name")]
    MissingName { index: usize },

    #[error("instrumentation #{index} has an invalid event name '{name}'")]
    InvalidName { index: usize, name: String },

    #[error("instrumentation '{name}' (#{index}) is missing an action")]
    MissingAction { index: usize, name: String },

    #[error("instrumentation #{index} names unknown action '{action}'")]
    UnknownAction { index: usize, action: String },

    #[error("instrumentation #{index} names unknown logger '{logger}'")]
    UnknownLogger { index: usize, logger: String },

    #[error("TOML syntax error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
