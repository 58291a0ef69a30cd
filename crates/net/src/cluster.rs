// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One logical cluster of carbon endpoints and the fan-out probe that
//! exercises each of them.

use std::time::Duration;

use relaymon_core::sanitize;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::neterror::{classify, NetError, ProbeOutcome};

/// Gap between each of the four synthetic writes.
///
/// See `SPEC_FULL.md` §9 — an operator-invisible tuning constant, not
/// exposed via configuration.
const WRITE_GAP: Duration = Duration::from_millis(10);

/// A named group of carbon endpoints probed together.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub name: String,
    pub required: bool,
    pub endpoints: Vec<String>,
    pub timeout: Duration,
    pub test_metric_prefix: String,
    /// Last classified error per endpoint, memoized across ticks so
    /// only *changed* transport errors generate events.
    pub last_error: Vec<Option<NetError>>,
}

impl Cluster {
    pub fn new(
        name: impl Into<String>,
        required: bool,
        timeout: Duration,
        test_metric_prefix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            required,
            endpoints: Vec::new(),
            timeout,
            test_metric_prefix: test_metric_prefix.into(),
            last_error: Vec::new(),
        }
    }

    pub fn push_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoints.push(endpoint.into());
        self.last_error.push(None);
    }

    /// Probe every endpoint in parallel. Returns whether the cluster as
    /// a whole is reachable (`failed < total`, i.e. any endpoint alive
    /// keeps it up) and the per-endpoint classified result.
    pub async fn check(&self, now_unix: i64) -> (bool, Vec<Option<NetError>>) {
        let sanitized_cluster = sanitize(&self.name);
        let mut joins = Vec::with_capacity(self.endpoints.len());
        for endpoint in &self.endpoints {
            let endpoint = endpoint.clone();
            let prefix = self.test_metric_prefix.clone();
            let sanitized_cluster = sanitized_cluster.clone();
            let probe_timeout = self.timeout;
            joins.push(tokio::spawn(async move {
                probe_endpoint(&endpoint, &prefix, &sanitized_cluster, probe_timeout, now_unix)
                    .await
            }));
        }

        let mut results = Vec::with_capacity(joins.len());
        let mut failed = 0usize;
        for join in joins {
            let outcome = match join.await {
                Ok(outcome) => outcome,
                Err(_) => ProbeOutcome::Io(std::io::Error::other("probe task panicked")),
            };
            let classified = classify(outcome);
            if classified.is_some() {
                failed += 1;
            }
            results.push(classified);
        }

        (failed < results.len(), results)
    }
}

/// Probe a single endpoint: connect, write the synthetic line as four
/// separate writes with an inter-write gap, then close.
///
/// The gap exercises the relay's read path rather than just the TCP
/// handshake — a relay that accepts then silently closes must surface
/// as an error, which a bare connect-and-close would miss.
async fn probe_endpoint(
    endpoint: &str,
    test_metric_prefix: &str,
    sanitized_cluster: &str,
    probe_timeout: Duration,
    now_unix: i64,
) -> ProbeOutcome {
    let connect = timeout(probe_timeout, TcpStream::connect(endpoint)).await;
    let mut stream = match connect {
        Ok(Ok(stream)) => stream,
        Ok(Err(err)) => return ProbeOutcome::Io(err),
        Err(_) => return ProbeOutcome::Timeout,
    };

    let sanitized_endpoint = sanitize(endpoint);
    let line = format!(
        "{test_metric_prefix}.test.network.carbon.{sanitized_cluster}.{sanitized_endpoint} 1 {now_unix}\n"
    );
    let chunks = split_into_four(&line);

    let write_result = timeout(probe_timeout, async {
        for chunk in chunks {
            stream.write_all(chunk.as_bytes()).await?;
            tokio::time::sleep(WRITE_GAP).await;
        }
        Ok::<(), std::io::Error>(())
    })
    .await;

    let outcome = match write_result {
        Ok(Ok(())) => ProbeOutcome::Ok,
        Ok(Err(err)) => ProbeOutcome::Io(err),
        Err(_) => {
            // Cancellation: force-close so the caller isn't left waiting.
            drop(stream);
            return ProbeOutcome::Timeout;
        }
    };
    let _ = stream.shutdown().await;
    outcome
}

/// Split a line into (up to) four roughly equal pieces for the
/// staggered write sequence.
fn split_into_four(line: &str) -> Vec<&str> {
    let bytes = line.len();
    if bytes < 4 {
        return vec![line];
    }
    let chunk = bytes.div_ceil(4);
    let mut out = Vec::with_capacity(4);
    let mut start = 0;
    while start < bytes {
        let end = (start + chunk).min(bytes);
        out.push(&line[start..end]);
        start = end;
    }
    out
}

#[cfg(test)]
#[path = "cluster_tests.rs"]
mod tests;
