// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A small closed union over the two checker kinds the monitor loop
//! drives. Both are concrete types known at this call site, so a
//! `match`-dispatching enum is simpler than a trait object.

use relaymon_core::{CheckerState, Metric};
use relaymon_net::NetworkChecker;
use relaymon_procinfo::ServiceChecker;

pub enum CheckerHandle {
    Service(ServiceChecker),
    Network(NetworkChecker),
}

impl CheckerHandle {
    pub fn name(&self) -> &str {
        match self {
            CheckerHandle::Service(c) => c.name(),
            CheckerHandle::Network(c) => c.name(),
        }
    }

    pub async fn status(&mut self) -> (CheckerState, Vec<String>) {
        match self {
            CheckerHandle::Service(c) => c.status().await,
            CheckerHandle::Network(c) => c.status(now_unix()).await,
        }
    }

    pub fn metrics(&self, state: CheckerState) -> Vec<Metric> {
        match self {
            CheckerHandle::Service(c) => c.metrics(state),
            CheckerHandle::Network(c) => c.metrics(state),
        }
    }
}

fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
