// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use relaymon_core::CheckerState;
use std::time::Duration;
use tokio::net::TcpListener;

async fn healthy_endpoint() -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr").to_string();
    let handle = tokio::spawn(async move {
        if let Ok((mut sock, _)) = listener.accept().await {
            use tokio::io::AsyncReadExt;
            let mut buf = [0u8; 256];
            loop {
                match sock.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(_) => continue,
                }
            }
        }
    });
    (addr, handle)
}

async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr").to_string();
    drop(listener);
    addr
}

fn thresholds() -> Thresholds {
    Thresholds { check_count: 1, fail_count: 2, reset_count: 1 }
}

#[tokio::test]
async fn all_healthy_clusters_report_success_after_warmup() {
    let (addr, _h) = healthy_endpoint().await;
    let mut cluster = Cluster::new("c1", true, Duration::from_millis(500), "test");
    cluster.push_endpoint(addr);
    let mut checker = NetworkChecker::new("carbon", vec![cluster], thresholds());

    let (state, events) = checker.status(1).await;
    assert_eq!(state, CheckerState::Success);
    assert!(events.is_empty());
}

#[tokio::test]
async fn a_required_cluster_down_forces_non_success() {
    let dead = dead_endpoint().await;
    let mut cluster = Cluster::new("c1", true, Duration::from_millis(200), "test");
    cluster.push_endpoint(dead);
    let mut checker = NetworkChecker::new("carbon", vec![cluster], thresholds());

    let (state, events) = checker.status(1).await;
    assert_ne!(state, CheckerState::Success);
    assert_eq!(events.len(), 1);
}

#[tokio::test]
async fn an_optional_cluster_down_does_not_fail_the_checker() {
    let dead = dead_endpoint().await;
    let mut cluster = Cluster::new("optional", false, Duration::from_millis(200), "test");
    cluster.push_endpoint(dead);
    let mut checker = NetworkChecker::new("carbon", vec![cluster], thresholds());

    let (state, _events) = checker.status(1).await;
    assert_eq!(state, CheckerState::Success);
}

#[tokio::test]
async fn all_clusters_down_fails_even_if_none_are_required() {
    let dead1 = dead_endpoint().await;
    let dead2 = dead_endpoint().await;
    let mut c1 = Cluster::new("a", false, Duration::from_millis(200), "test");
    c1.push_endpoint(dead1);
    let mut c2 = Cluster::new("b", false, Duration::from_millis(200), "test");
    c2.push_endpoint(dead2);
    let mut checker = NetworkChecker::new("carbon", vec![c1, c2], thresholds());

    let (state, _) = checker.status(1).await;
    assert_ne!(state, CheckerState::Success);
}

#[tokio::test]
async fn metrics_emit_one_sanitized_line_per_endpoint() {
    let dead = dead_endpoint().await;
    let mut cluster = Cluster::new("my cluster", true, Duration::from_millis(200), "test");
    cluster.push_endpoint(dead);
    let mut checker = NetworkChecker::new("carbon", vec![cluster], thresholds());

    let (state, _events) = checker.status(1).await;
    let metrics = checker.metrics(state);

    assert_eq!(metrics.len(), 1);
    assert!(metrics[0].name.starts_with("network.carbon.my_cluster."));
    assert_ne!(metrics[0].value, "0", "a down endpoint must not report the up value");
}

#[tokio::test]
async fn metrics_report_zero_for_a_healthy_endpoint() {
    let (addr, _h) = healthy_endpoint().await;
    let mut cluster = Cluster::new("c1", true, Duration::from_millis(500), "test");
    cluster.push_endpoint(addr);
    let mut checker = NetworkChecker::new("carbon", vec![cluster], thresholds());

    let (state, _events) = checker.status(1).await;
    let metrics = checker.metrics(state);

    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].value, "0");
}

#[tokio::test]
async fn repeated_identical_failure_does_not_re_emit_an_event() {
    let dead = dead_endpoint().await;
    let mut cluster = Cluster::new("c1", true, Duration::from_millis(200), "test");
    cluster.push_endpoint(dead);
    let mut checker = NetworkChecker::new("carbon", vec![cluster], thresholds());

    let (_, first_events) = checker.status(1).await;
    let (_, second_events) = checker.status(2).await;
    assert_eq!(first_events.len(), 1);
    assert!(second_events.is_empty(), "unchanged failure must not re-emit an event");
}
