// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! relaymon-core: shared domain types for the relay host monitor.
//!
//! Holds the pieces every checker and the monitor loop agree on: the
//! checker state enum, the hysteresis engine that turns raw per-tick
//! outcomes into a debounced state, the pre-rendered metric type, and
//! the metric-name sanitizer.

pub mod hysteresis;
pub mod metric;
pub mod sanitize;
pub mod state;
pub mod verdict;

pub use hysteresis::{Hysteresis, Thresholds};
pub use metric::Metric;
pub use sanitize::sanitize;
pub use state::CheckerState;
pub use verdict::Verdict;
