// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hk fire <manifest> <event>` - Fire one event through a booted host

use crate::actions::builtin_actions;
use anyhow::{bail, Result};
use clap::Args;
use hk_core::config::{parse_manifest_file, resolve};
use hk_core::{EventBus, Host, Logger, LoggerCatalog, TracingSink};
use std::path::PathBuf;

#[derive(Args)]
pub struct FireArgs {
    /// Path to the instrumentation manifest
    pub manifest: PathBuf,

    /// Event name
    pub event: String,

    /// Event payload as a JSON object
    #[arg(short, long, default_value = "{}")]
    pub payload: String,

    /// Detach built-in log subscribers regardless of the manifest
    #[arg(long)]
    pub unsubscribe_defaults: bool,

    /// Do not install built-in log subscribers at all
    #[arg(long)]
    pub no_defaults: bool,
}

pub fn handle(args: FireArgs) -> Result<()> {
    let raw = parse_manifest_file(&args.manifest)?;
    let mut configuration = resolve(&raw, &builtin_actions(), &LoggerCatalog::new())?;
    if args.unsubscribe_defaults {
        configuration.unsubscribe_defaults = true;
    }

    let payload = match serde_json::from_str::<serde_json::Value>(&args.payload)? {
        serde_json::Value::Object(map) => map,
        other => bail!("payload must be a JSON object, got: {}", other),
    };

    let mut host = Host::new(EventBus::new());
    if !args.no_defaults {
        host.install_defaults(&Logger::new(TracingSink::new("defaults")));
    }
    host.configure(configuration)?;
    host.boot()?;

    if !host.bus().is_listening(&args.event) {
        tracing::warn!(event = %args.event, "no listeners for event");
    }
    host.bus().instrument(&args.event, payload)?;
    Ok(())
}
