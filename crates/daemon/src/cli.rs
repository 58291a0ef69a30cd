// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line surface: normal monitor-loop operation plus the two
//! one-shot host-eviction modes.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "relaymon", version, about = "Host-local availability monitor for a carbon relay")]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(long, default_value = "/etc/relaymon.yml")]
    pub config: PathBuf,

    /// Override the configured log level
    #[arg(long)]
    pub loglevel: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Stop the relay unit, detach configured addresses, and run the error hook
    Evict,
    /// Block until every configured IP is present on the interface
    WaitIp {
        /// Give up and exit 1 after this long
        #[arg(long, value_parser = humantime::parse_duration, default_value = "60s")]
        timeout: Duration,
    },
}
