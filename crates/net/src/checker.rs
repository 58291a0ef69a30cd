// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregates a set of [`Cluster`] probes into a single debounced
//! [`CheckerState`], mirroring the per-cluster required/optional split
//! the relay host actually cares about.

use relaymon_core::{sanitize, CheckerState, Hysteresis, Metric, Thresholds};

use crate::cluster::Cluster;
use crate::neterror::NetError;

/// Checks every configured carbon cluster each tick and folds the
/// per-cluster reachability into one hysteresis-debounced state.
pub struct NetworkChecker {
    name: String,
    clusters: Vec<Cluster>,
    hysteresis: Hysteresis,
}

impl NetworkChecker {
    pub fn new(name: impl Into<String>, clusters: Vec<Cluster>, thresholds: Thresholds) -> Self {
        Self { name: name.into(), clusters, hysteresis: Hysteresis::new(thresholds) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Probe every cluster, fold the results into the debounced state,
    /// and return the events raised by any endpoint whose classified
    /// error changed since the previous tick.
    pub async fn status(&mut self, now_unix: i64) -> (CheckerState, Vec<String>) {
        let mut success_check = true;
        let mut failed_clusters = 0usize;
        let mut events = Vec::new();

        for cluster in &mut self.clusters {
            let (cluster_ok, results) = cluster.check(now_unix).await;
            if !cluster_ok {
                failed_clusters += 1;
                if cluster.required {
                    success_check = false;
                }
            }
            events.extend(diff_events(cluster, &results));
        }

        if success_check && failed_clusters == self.clusters.len() && !self.clusters.is_empty() {
            success_check = false;
        }

        let state = self.hysteresis.advance(false, success_check);
        (state, events)
    }

    /// One metric per endpoint, carrying that endpoint's last classified
    /// state rather than a single aggregate for the whole checker.
    pub fn metrics(&self, _state: CheckerState) -> Vec<Metric> {
        let mut metrics = Vec::new();
        for cluster in &self.clusters {
            let sanitized_cluster = sanitize(&cluster.name);
            for (endpoint, last_error) in cluster.endpoints.iter().zip(&cluster.last_error) {
                let value = last_error.as_ref().map_or(0, |e| e.code().as_metric_value());
                metrics.push(Metric::new(
                    format!("network.carbon.{sanitized_cluster}.{}", sanitize(endpoint)),
                    value.to_string(),
                ));
            }
        }
        metrics
    }
}

/// Compare this tick's classified endpoint errors against the
/// previously observed ones, update the cluster's memo, and render a
/// human-readable event for every endpoint whose status changed.
fn diff_events(cluster: &mut Cluster, results: &[Option<NetError>]) -> Vec<String> {
    let mut events = Vec::new();
    for (i, current) in results.iter().enumerate() {
        let previous = cluster.last_error.get(i).cloned().flatten();
        if previous.as_ref() != current.as_ref() {
            if let Some(err) = current {
                events.push(format!("endpoint {} {}", cluster.endpoints[i], err));
            }
            cluster.last_error[i] = current.clone();
        }
    }
    events
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
