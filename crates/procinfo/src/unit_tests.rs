// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn main_pid_regex_extracts_pid_and_comm() {
    let sample = "   Main PID: 14373 (sshd)\n     Tasks: 1";
    let captures = MAIN_PID.captures(sample).expect("must match");
    assert_eq!(&captures[1], "14373");
    assert_eq!(&captures[2], "(sshd)");
}

#[test]
fn main_pid_regex_rejects_lines_without_a_pid() {
    let sample = "   Loaded: loaded (/usr/lib/systemd/system/sshd.service)";
    assert!(MAIN_PID.captures(sample).is_none());
}

#[tokio::test]
async fn unknown_unit_name_is_reported_as_not_found_or_failed() {
    // A unit name this unlikely to exist still exercises the full
    // subprocess + exit-code path without requiring root.
    let result = status("relaymon-test-nonexistent-unit-xyz.service").await;
    assert!(result.is_err());
}
