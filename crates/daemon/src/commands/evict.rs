// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `evict` one-shot mode: take this host out of the serving pool
//! without entering the monitor loop.

use crate::config::Config;

/// Stop the relay unit, detach every configured address, and run the
/// error hook. Returns the number of sub-steps that failed — the
/// caller uses this directly as the process exit code.
pub async fn run(cfg: &Config) -> u32 {
    let mut failures = 0u32;

    if let Err(e) = relaymon_procinfo::unit::stop(&cfg.service).await {
        tracing::error!(service = %cfg.service, error = %e, "evict: failed to stop relay unit");
        failures += 1;
    }

    for ip in &cfg.ips {
        if let Err(e) = relaymon_effectors::del_address(&cfg.iface, ip).await {
            tracing::error!(iface = %cfg.iface, ip = %ip, error = %e, "evict: failed to detach address");
            failures += 1;
        }
    }

    if !cfg.error_cmd.is_empty() {
        if let Err(e) = relaymon_effectors::run_hook(&cfg.error_cmd).await {
            tracing::error!(error = %e, "evict: error_cmd failed");
            failures += 1;
        }
    }

    failures
}

#[cfg(test)]
#[path = "evict_tests.rs"]
mod tests;
