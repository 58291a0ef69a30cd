// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single shared shutdown flag set by SIGINT/SIGTERM and observed by
//! the monitor loop's sleep slices and the metric sender's backoff.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Spawn the signal listener and return the flag it sets on SIGINT or
/// SIGTERM. Cheap to clone further via the returned `Arc`.
pub fn install() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let task_flag = flag.clone();
    tokio::spawn(async move {
        let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("received SIGINT, shutting down");
            }
            _ = sigterm.recv() => {
                tracing::info!("received SIGTERM, shutting down");
            }
        }
        task_flag.store(true, Ordering::Relaxed);
    });
    flag
}

/// Sleep for `total`, but in one-second slices so a shutdown request
/// is observed within roughly a second instead of at the end of the
/// full interval.
pub async fn sleep_interruptible(total: std::time::Duration, shutdown: &AtomicBool) {
    let slice = std::time::Duration::from_secs(1);
    let mut remaining = total;
    while remaining > std::time::Duration::ZERO {
        if shutdown.load(Ordering::Relaxed) {
            return;
        }
        let step = remaining.min(slice);
        tokio::time::sleep(step).await;
        remaining = remaining.saturating_sub(step);
    }
}

#[cfg(test)]
#[path = "shutdown_tests.rs"]
mod tests;
