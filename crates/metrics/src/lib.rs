// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! relaymon-metrics: a drop-oldest metric queue and its graphite
//! line-protocol sender.

pub mod queue;
pub mod sender;

pub use queue::{GraphiteLine, MetricQueue};
pub use sender::run as run_sender;
