// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! relaymon-procinfo: systemd unit and `/proc` process-identity checking.

pub mod checker;
pub mod identity;
pub mod unit;

pub use checker::ServiceChecker;
pub use identity::ProcessIdentity;
pub use unit::{UnitError, UnitStatus};
