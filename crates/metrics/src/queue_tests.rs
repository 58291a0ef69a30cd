// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn push_and_pop_preserve_order() {
    let q = MetricQueue::new(10);
    q.push(GraphiteLine::new("a", "1", 1));
    q.push(GraphiteLine::new("b", "2", 2));
    let batch = q.pop_batch(10);
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].name, "a");
    assert_eq!(batch[1].name, "b");
}

#[test]
fn overflow_drops_the_two_oldest_entries() {
    let q = MetricQueue::new(2);
    q.push(GraphiteLine::new("a", "1", 1));
    q.push(GraphiteLine::new("b", "2", 2));
    q.push(GraphiteLine::new("c", "3", 3));
    let batch = q.pop_batch(10);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].name, "c");
}

#[test]
fn pop_batch_never_returns_more_than_requested() {
    let q = MetricQueue::new(10);
    for i in 0..5 {
        q.push(GraphiteLine::new(format!("m{i}"), "1", i));
    }
    let batch = q.pop_batch(3);
    assert_eq!(batch.len(), 3);
    assert_eq!(q.len(), 2);
}

#[test]
fn render_produces_a_single_graphite_line() {
    let line = GraphiteLine::new("relaymon.service.sshd", "1", 1700000000);
    assert_eq!(line.render(), "relaymon.service.sshd 1 1700000000\n");
}
