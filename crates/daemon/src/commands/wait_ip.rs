// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `wait-ip` one-shot mode: block until every configured address
//! is present on the interface, or time out.

use std::time::Duration;

use tokio::time::Instant;

use crate::config::Config;

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll `cfg.iface` until all of `cfg.ips` are attached or `timeout`
/// elapses. Returns `true` on success.
pub async fn run(cfg: &Config, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;

    loop {
        match relaymon_effectors::interface_addresses(&cfg.iface).await {
            Ok(present) => {
                if cfg.ips.iter().all(|ip| present.iter().any(|p| p == ip)) {
                    return true;
                }
            }
            Err(e) => {
                tracing::error!(iface = %cfg.iface, error = %e, "wait-ip: failed to read interface addresses");
            }
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return false;
        }
        tokio::time::sleep(POLL_INTERVAL.min(remaining)).await;
    }
}

#[cfg(test)]
#[path = "wait_ip_tests.rs"]
mod tests;
