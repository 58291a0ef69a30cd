// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs the configured `error_cmd`/`success_cmd` shell hooks on a
//! verdict transition.

use std::time::Duration;

use tokio::process::Command;

use crate::error::EffectorError;
use crate::process::run_combined;

const HOOK_DEADLINE: Duration = Duration::from_secs(20);

/// Run `command` through `sh -c`, capturing combined stdout+stderr.
pub async fn run_hook(command: &str) -> Result<String, EffectorError> {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    run_combined(cmd, HOOK_DEADLINE).await
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
