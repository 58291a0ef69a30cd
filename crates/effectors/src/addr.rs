// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Idempotent `ip addr add/del` against a single interface.
//!
//! The relay host advertises its own health by owning (or not owning)
//! a set of virtual addresses, so this always checks the interface's
//! current address list before shelling out — a repeated `add` for an
//! address already present, or a `del` for one already gone, is a
//! silent no-op rather than an `ip` error round trip.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tokio::process::Command;

use crate::error::EffectorError;
use crate::process::run_combined;

const IP_DEADLINE: Duration = Duration::from_secs(180);

#[allow(clippy::expect_used)]
static ADDR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"inet6?\s+([0-9a-fA-F:.]+/\d+)").expect("constant regex pattern is valid"));

/// Addresses (in CIDR form) currently configured on `iface`.
pub async fn interface_addresses(iface: &str) -> Result<Vec<String>, EffectorError> {
    let mut cmd = Command::new("ip");
    cmd.args(["-o", "addr", "show", "dev", iface]);
    let out = run_combined(cmd, IP_DEADLINE).await?;

    Ok(ADDR_LINE.captures_iter(&out).map(|c| c[1].to_string()).collect())
}

/// Add `cidr` to `iface` with global scope, unless it's already there.
pub async fn add_address(iface: &str, cidr: &str) -> Result<(), EffectorError> {
    if interface_addresses(iface).await?.iter().any(|a| a == cidr) {
        return Ok(());
    }
    ip_addr_exec(iface, cidr, true).await?;
    Ok(())
}

/// Remove `cidr` from `iface`, unless it's already gone.
pub async fn del_address(iface: &str, cidr: &str) -> Result<(), EffectorError> {
    if !interface_addresses(iface).await?.iter().any(|a| a == cidr) {
        return Ok(());
    }
    ip_addr_exec(iface, cidr, false).await?;
    Ok(())
}

async fn ip_addr_exec(iface: &str, cidr: &str, add: bool) -> Result<String, EffectorError> {
    let verb = if add { "add" } else { "del" };
    let mut cmd = Command::new("ip");
    cmd.args(["addr", verb, "dev", iface, cidr, "scope", "global"]);
    run_combined(cmd, IP_DEADLINE).await
}

#[cfg(test)]
#[path = "addr_tests.rs"]
mod tests;
