// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watches a systemd-managed process, re-resolving its pid via
//! `systemctl` only when the cached identity goes stale.

use std::io;

use relaymon_core::{sanitize, CheckerState, Hysteresis, Metric, Thresholds};

use crate::identity::{self, ProcessIdentity};
use crate::unit::{self, UnitError};

const SYSTEMD_PID: i64 = 1;

/// Checks that a systemd-managed service is still running the same
/// process it was the last time it was observed.
pub struct ServiceChecker {
    name: String,
    process: Option<ProcessIdentity>,
    hysteresis: Hysteresis,
}

impl ServiceChecker {
    pub fn new(name: impl Into<String>, thresholds: Thresholds) -> Self {
        Self { name: name.into(), process: None, hysteresis: Hysteresis::new(thresholds) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn status(&mut self) -> (CheckerState, Vec<String>) {
        let outcome = match &self.process {
            Some(cached) => self.recheck_cached(cached.clone()).await,
            None => self.resolve_via_systemctl().await,
        };

        match outcome {
            Outcome::Internal(msg) => {
                self.process = None;
                (self.hysteresis.advance(true, false), vec![msg])
            }
            Outcome::Success(identity) => {
                self.process = Some(identity);
                (self.hysteresis.advance(false, true), Vec::new())
            }
            Outcome::Failure(msg) => {
                self.process = None;
                (self.hysteresis.advance(false, false), vec![msg])
            }
        }
    }

    async fn recheck_cached(&self, cached: ProcessIdentity) -> Outcome {
        match identity::read(cached.pid) {
            Ok(current) if current == cached => Outcome::Success(current),
            Ok(_) => Outcome::Failure(format!("service {} pid reused", self.name)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Outcome::Failure(format!("service {} exited", self.name))
            }
            Err(e) => Outcome::Internal(format!("service {} {e}", self.name)),
        }
    }

    async fn resolve_via_systemctl(&self) -> Outcome {
        let unit = match unit::status(&self.name).await {
            Ok(unit) => unit,
            Err(UnitError::Unknown(name, detail)) => {
                return Outcome::Internal(format!("service {name} {detail}"))
            }
            Err(other) => return Outcome::Failure(other.to_string()),
        };

        match identity::read(unit.pid) {
            Ok(proc) if proc.ppid == SYSTEMD_PID && proc.command_name == unit.command_name => {
                Outcome::Success(proc)
            }
            Ok(_) => Outcome::Failure(format!("service {} pid mismatch", self.name)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Outcome::Failure(format!("service {} exited before it could be verified", self.name))
            }
            Err(e) => Outcome::Internal(format!("service {} {e}", self.name)),
        }
    }

    pub fn metrics(&self, state: CheckerState) -> Vec<Metric> {
        vec![Metric::new(format!("systemd.{}", sanitize(&self.name)), state.as_metric_value().to_string())]
    }
}

enum Outcome {
    Success(ProcessIdentity),
    Failure(String),
    Internal(String),
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
