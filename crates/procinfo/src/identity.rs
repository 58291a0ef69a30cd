// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reads a process's identity out of `/proc` so a checker can tell a
//! long-lived daemon from a different process that was handed the
//! same pid after the original exited.

use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Identity of a running process, derived from `/proc/<pid>`.
///
/// Two reads of the same still-alive process always compare equal;
/// a pid reuse changes `start_time` (and usually `command_name`),
/// which is exactly the signal a service checker needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessIdentity {
    pub pid: i64,
    pub ppid: i64,
    /// Raw `comm` field from `/proc/<pid>/stat`, parentheses included.
    pub command_name: String,
    pub start_time: SystemTime,
}

/// Read the identity of the process with the given pid.
///
/// Returns `Err(io::ErrorKind::NotFound)` if the process no longer
/// exists, which callers should treat as "the process exited" rather
/// than an infrastructure failure.
pub fn read(pid: i64) -> io::Result<ProcessIdentity> {
    let proc_dir = format!("/proc/{pid}");
    let start_time = dir_ctime(&proc_dir)?;

    let stat = fs::read_to_string(format!("{proc_dir}/stat"))?;
    let fields: Vec<&str> = stat.trim_end().split(' ').collect();
    if fields.len() < 4 {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "can't parse pid stat"));
    }
    let command_name = fields[1].to_string();
    let ppid = fields[3]
        .parse::<i64>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(ProcessIdentity { pid, ppid, command_name, start_time })
}

fn dir_ctime(path: &str) -> io::Result<SystemTime> {
    let meta = fs::metadata(path)?;
    let secs = meta.ctime();
    let nanos = meta.ctime_nsec();
    Ok(UNIX_EPOCH + Duration::new(secs as u64, nanos as u32))
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
