// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The monitor loop: tick scheduler, verdict composer, and effector
//! dispatch on verdict transitions.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use relaymon_core::{CheckerState, Verdict};
use relaymon_metrics::{GraphiteLine, MetricQueue};

use crate::checker_handle::CheckerHandle;
use crate::shutdown::sleep_interruptible;

pub struct MonitorLoop {
    checkers: Vec<CheckerHandle>,
    committed: Verdict,
    iface: String,
    ips: Vec<String>,
    error_cmd: String,
    success_cmd: String,
    metric_prefix: String,
    metric_queue: Arc<MetricQueue>,
    check_interval: Duration,
}

impl MonitorLoop {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        checkers: Vec<CheckerHandle>,
        iface: String,
        ips: Vec<String>,
        error_cmd: String,
        success_cmd: String,
        metric_prefix: String,
        metric_queue: Arc<MetricQueue>,
        check_interval: Duration,
    ) -> Self {
        Self {
            checkers,
            committed: Verdict::Collecting,
            iface,
            ips,
            error_cmd,
            success_cmd,
            metric_prefix,
            metric_queue,
            check_interval,
        }
    }

    pub async fn run(&mut self, shutdown: Arc<AtomicBool>) {
        use std::sync::atomic::Ordering;
        while !shutdown.load(Ordering::Relaxed) {
            self.tick().await;
            sleep_interruptible(self.check_interval, &shutdown).await;
        }
    }

    /// Run one tick: poll every checker, compose the step verdict,
    /// push metrics, and react to a verdict transition.
    pub async fn tick(&mut self) -> Verdict {
        let total = self.checkers.len();
        let mut success_count = 0usize;
        let mut step = Verdict::Collecting;

        for checker in &mut self.checkers {
            let (state, events) = checker.status().await;
            for event in events {
                tracing::warn!(checker = checker.name(), %event, "checker event");
            }
            for metric in checker.metrics(state) {
                self.push_metric(&metric.name, &metric.value);
            }
            match state {
                CheckerState::Error => step = Verdict::Error,
                CheckerState::Success => success_count += 1,
                _ => {}
            }
        }

        if total > 0 && success_count == total {
            step = Verdict::Success;
        }

        self.push_metric("status", &step.as_metric_value().to_string());

        if step != self.committed {
            self.handle_transition(step).await;
        }

        self.committed
    }

    async fn handle_transition(&mut self, step: Verdict) {
        match step {
            Verdict::Error => {
                tracing::error!(action = "down", "go to error state");
                for ip in &self.ips {
                    if let Err(e) = relaymon_effectors::del_address(&self.iface, ip).await {
                        tracing::error!(iface = %self.iface, ip = %ip, error = %e, "address detach failed");
                    }
                }
                if !self.error_cmd.is_empty() {
                    match relaymon_effectors::run_hook(&self.error_cmd).await {
                        Ok(out) => tracing::error!(action = "down", output = %out, "ran error_cmd"),
                        Err(e) => tracing::error!(action = "down", error = %e, "error_cmd failed"),
                    }
                }
                self.committed = Verdict::Error;
            }
            Verdict::Success => {
                tracing::info!(action = "up", "go to success state");
                let mut attach_failed = false;
                for ip in &self.ips {
                    if let Err(e) = relaymon_effectors::add_address(&self.iface, ip).await {
                        tracing::error!(iface = %self.iface, ip = %ip, error = %e, "address attach failed");
                        attach_failed = true;
                    }
                }

                let mut hook_failed = false;
                if !self.success_cmd.is_empty() {
                    match relaymon_effectors::run_hook(&self.success_cmd).await {
                        Ok(out) => tracing::info!(action = "up", output = %out, "ran success_cmd"),
                        Err(e) => {
                            tracing::error!(action = "up", error = %e, "success_cmd failed");
                            hook_failed = true;
                        }
                    }
                }

                self.committed = if attach_failed || hook_failed { Verdict::Error } else { Verdict::Success };
            }
            Verdict::Collecting => {
                self.committed = Verdict::Collecting;
            }
        }
    }

    fn push_metric(&self, name: &str, value: &str) {
        let full_name = format!("{}.{name}", self.metric_prefix);
        self.metric_queue.push(GraphiteLine::new(full_name, value.to_string(), now_unix()));
    }
}

fn now_unix() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs() as i64).unwrap_or(0)
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
