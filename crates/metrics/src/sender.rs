// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Background task that drains a [`MetricQueue`] and writes batches of
//! lines to a graphite-line-protocol relay over TCP, reconnecting with
//! a fixed backoff whenever the relay drops or refuses the connection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::queue::MetricQueue;

const RECONNECT_BACKOFF: Duration = Duration::from_secs(1);
const IDLE_POLL: Duration = Duration::from_millis(200);

/// Sends whatever's in `queue` to `address` until `shutdown` is set.
///
/// Batches up to `batch_send` lines per write; an empty queue is
/// polled rather than busy-spun, and a send or connect failure is
/// logged once per failure episode instead of once per metric.
pub async fn run(
    queue: Arc<MetricQueue>,
    address: String,
    batch_send: usize,
    shutdown: Arc<AtomicBool>,
) {
    let batch_send = batch_send.max(1);
    let mut stream: Option<TcpStream> = None;
    let mut failed = false;

    while !shutdown.load(Ordering::Relaxed) {
        if queue.is_empty() {
            sleep(IDLE_POLL).await;
            continue;
        }

        let batch = queue.pop_batch(batch_send);
        if batch.is_empty() {
            continue;
        }

        if stream.is_none() {
            match TcpStream::connect(&address).await {
                Ok(s) => stream = Some(s),
                Err(e) => {
                    if !failed {
                        failed = true;
                        tracing::error!(address = %address, error = %e, "graphite connect failed");
                    }
                    sleep(RECONNECT_BACKOFF).await;
                    continue;
                }
            }
        }

        let mut payload = String::new();
        for line in &batch {
            payload.push_str(&line.render());
        }

        let write_result = match stream.as_mut() {
            Some(s) => s.write_all(payload.as_bytes()).await,
            None => unreachable!("stream connected above"),
        };

        match write_result {
            Ok(()) => {
                if failed {
                    failed = false;
                    tracing::info!(address = %address, "metrics send recovered");
                }
            }
            Err(e) => {
                stream = None;
                if !failed {
                    failed = true;
                    tracing::error!(address = %address, error = %e, "graphite send failed");
                }
                sleep(RECONNECT_BACKOFF).await;
            }
        }
    }
}

#[cfg(test)]
#[path = "sender_tests.rs"]
mod tests;
