// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hk check <manifest>` - Validate a manifest

use crate::actions::builtin_actions;
use anyhow::Result;
use clap::Args;
use hk_core::config::{parse_manifest_file, resolve};
use hk_core::LoggerCatalog;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the instrumentation manifest
    pub manifest: PathBuf,
}

pub fn handle(args: CheckArgs) -> Result<()> {
    let raw = parse_manifest_file(&args.manifest)?;
    let configuration = resolve(&raw, &builtin_actions(), &LoggerCatalog::new())?;

    for item in &raw.instrumentation {
        // resolve() guarantees name and action are present
        let name = item.name.as_deref().unwrap_or_default();
        let action = item.action.as_deref().unwrap_or_default();
        match &item.logger {
            Some(logger) => println!("{} -> {} [{}]", name, action, logger),
            None => println!("{} -> {}", name, action),
        }
    }

    println!(
        "{} instrumentation(s) OK",
        configuration.instrumentations.len()
    );
    if configuration.unsubscribe_defaults {
        println!("Built-in log subscribers will be detached");
    }
    Ok(())
}
