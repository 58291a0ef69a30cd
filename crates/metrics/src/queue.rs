// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A small bounded queue that drops the oldest entries instead of
//! blocking the monitor loop when the sender falls behind. Losing a
//! couple of stale metric points is cheaper than stalling a check tick
//! on a slow or disconnected graphite relay.

use std::collections::VecDeque;

use parking_lot::Mutex;

/// One pre-rendered graphite line, ready to write to the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphiteLine {
    pub name: String,
    pub value: String,
    pub timestamp: i64,
}

impl GraphiteLine {
    pub fn new(name: impl Into<String>, value: impl Into<String>, timestamp: i64) -> Self {
        Self { name: name.into(), value: value.into(), timestamp }
    }

    pub fn render(&self) -> String {
        format!("{} {} {}\n", self.name, self.value, self.timestamp)
    }
}

pub struct MetricQueue {
    capacity: usize,
    inner: Mutex<VecDeque<GraphiteLine>>,
}

impl MetricQueue {
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1), inner: Mutex::new(VecDeque::with_capacity(capacity)) }
    }

    /// Push a line, dropping the two oldest queued lines if the queue
    /// is already at capacity.
    pub fn push(&self, line: GraphiteLine) {
        let mut q = self.inner.lock();
        if q.len() >= self.capacity {
            q.pop_front();
            q.pop_front();
        }
        q.push_back(line);
    }

    /// Pop up to `max` lines without blocking.
    pub fn pop_batch(&self, max: usize) -> Vec<GraphiteLine> {
        let mut q = self.inner.lock();
        let n = max.min(q.len());
        q.drain(..n).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
