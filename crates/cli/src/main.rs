// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! hk - Hookline CLI
//!
//! Checks instrumentation manifests and fires events through a host wired
//! from one, with the built-in log subscribers attached.

mod actions;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, fire};

#[derive(Parser)]
#[command(
    name = "hk",
    version,
    about = "Hookline - bind handlers to instrumentation points"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a manifest and list its instrumentations
    Check(check::CheckArgs),
    /// Boot a host from a manifest and fire one event
    Fire(fire::FireArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    match cli.command {
        Commands::Check(args) => check::handle(args),
        Commands::Fire(args) => fire::handle(args),
    }
}

fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
