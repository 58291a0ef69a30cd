// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shells out to `systemctl status` and parses the PID line out of its
//! human-readable output — systemd has no stable machine-readable
//! status surface for a single-field PID query that's worth the extra
//! dependency.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

/// Exit code `systemctl status` uses for a loaded-but-stopped unit.
/// See the LSB init script spec, table "Status action".
const EXIT_STOPPED: i32 = 3;
/// Exit code for a unit that doesn't exist at all.
const EXIT_NOT_FOUND: i32 = 4;

const PROBE_DEADLINE: Duration = Duration::from_secs(10);

#[allow(clippy::expect_used)]
static MAIN_PID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Main PID: +([0-9]+) (\([A-Za-z0-9_-]+\)?)").expect("constant regex pattern is valid")
});

#[derive(Debug, Error)]
pub enum UnitError {
    #[error("service {0} stopped")]
    Stopped(String),
    #[error("service {0} not found")]
    NotFound(String),
    #[error("service {0} failed")]
    Failed(String),
    #[error("service {0} {1}")]
    Unknown(String, String),
    #[error("service {0} can't extract pid")]
    NoPid(String),
}

/// The main PID and `comm` of a systemd unit, as reported right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitStatus {
    pub pid: i64,
    pub command_name: String,
}

/// Query `systemctl status <name>` and extract the unit's main pid.
pub async fn status(name: &str) -> Result<UnitStatus, UnitError> {
    let run = tokio::process::Command::new("/bin/systemctl").args(["status", name]).output();

    let output = match tokio::time::timeout(PROBE_DEADLINE, run).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => return Err(UnitError::Unknown(name.to_string(), e.to_string())),
        Err(_) => return Err(UnitError::Failed(name.to_string())),
    };

    if !output.status.success() {
        return Err(match output.status.code() {
            Some(EXIT_STOPPED) => UnitError::Stopped(name.to_string()),
            Some(EXIT_NOT_FOUND) => UnitError::NotFound(name.to_string()),
            _ => UnitError::Failed(name.to_string()),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let captures = MAIN_PID.captures(&stdout).ok_or_else(|| UnitError::NoPid(name.to_string()))?;
    let pid: i64 = captures[1].parse().map_err(|_| UnitError::NoPid(name.to_string()))?;
    let command_name = captures[2].to_string();

    Ok(UnitStatus { pid, command_name })
}

/// Stop a systemd unit, used by the evict one-shot mode to take this
/// host's relay out of service before detaching its addresses.
pub async fn stop(name: &str) -> Result<(), UnitError> {
    let run = tokio::process::Command::new("/bin/systemctl").args(["stop", name]).output();

    let output = match tokio::time::timeout(PROBE_DEADLINE, run).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => return Err(UnitError::Unknown(name.to_string(), e.to_string())),
        Err(_) => return Err(UnitError::Failed(name.to_string())),
    };

    if output.status.success() {
        Ok(())
    } else {
        Err(match output.status.code() {
            Some(EXIT_NOT_FOUND) => UnitError::NotFound(name.to_string()),
            _ => UnitError::Failed(name.to_string()),
        })
    }
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
