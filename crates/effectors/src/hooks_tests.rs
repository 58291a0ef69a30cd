// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn successful_hook_returns_its_output() {
    let out = run_hook("echo up").await.expect("echo must succeed");
    assert_eq!(out, "up\n");
}

#[tokio::test]
async fn failing_hook_reports_its_exit_code_and_output() {
    let err = run_hook("echo oops >&2; exit 7").await.expect_err("must fail");
    match err {
        EffectorError::ExitCode { code, output } => {
            assert_eq!(code, 7);
            assert_eq!(output, "oops\n");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn a_hook_that_outlives_its_deadline_times_out() {
    let err = run_hook("sleep 60").await.expect_err("must time out eventually");
    assert!(matches!(err, EffectorError::Timeout));
}
