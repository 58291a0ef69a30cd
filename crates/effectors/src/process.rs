// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared subprocess-with-deadline plumbing for the address
//! configurator and the error/success shell hooks.

use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::error::EffectorError;

/// Run `cmd`, collecting combined stdout+stderr, and fail with
/// [`EffectorError::Timeout`] if it doesn't finish within `deadline`.
pub async fn run_combined(mut cmd: Command, deadline: Duration) -> Result<String, EffectorError> {
    cmd.stdout(std::process::Stdio::piped());
    cmd.stderr(std::process::Stdio::piped());

    let output = match timeout(deadline, cmd.output()).await {
        Ok(result) => result?,
        Err(_) => return Err(EffectorError::Timeout),
    };

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(EffectorError::ExitCode {
            code: output.status.code().unwrap_or(-1),
            output: combined,
        });
    }

    Ok(combined)
}
