// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured logging setup: a severity floor from configuration,
//! overridable by `RUST_LOG`, writing formatted lines to stdout.

use tracing_subscriber::EnvFilter;

pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_ascii_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
