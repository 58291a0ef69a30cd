// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::config::Config;

#[tokio::test]
async fn stopping_a_nonexistent_unit_counts_as_one_failure() {
    let cfg = Config { service: "relaymon-test-nonexistent.service".to_string(), ..Config::default() };

    let failures = run(&cfg).await;

    assert_eq!(failures, 1);
}
