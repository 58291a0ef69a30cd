// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Cursor;

fn parse(text: &str, required: &[&str]) -> Vec<ClusterConfig> {
    let required: HashSet<String> = required.iter().map(|s| s.to_string()).collect();
    parse_clusters(Cursor::new(text), &required).expect("parse")
}

#[test]
fn simple_forward_cluster_with_default_port() {
    let cfg = "cluster main\n    forward\n    10.0.0.1 10.0.0.2\n    ;\n";
    let clusters = parse(cfg, &[]);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].name, "main");
    assert_eq!(clusters[0].endpoints, vec!["10.0.0.1:2003", "10.0.0.2:2003"]);
    assert!(!clusters[0].required);
}

#[test]
fn explicit_port_is_preserved() {
    let cfg = "cluster graphite any_of 10.0.0.1:2103 10.0.0.2:2103 ;\n";
    let clusters = parse(cfg, &[]);
    assert_eq!(clusters[0].endpoints, vec!["10.0.0.1:2103", "10.0.0.2:2103"]);
}

#[test]
fn required_cluster_is_flagged() {
    let cfg = "cluster main forward 10.0.0.1 ;\n";
    let clusters = parse(cfg, &["main"]);
    assert!(clusters[0].required);
}

#[test]
fn replication_argument_is_skipped_along_with_its_value() {
    let cfg = "cluster r useall replication 2 10.0.0.1 10.0.0.2 10.0.0.3 ;\n";
    let clusters = parse(cfg, &[]);
    assert_eq!(clusters[0].endpoints.len(), 3);
}

#[test]
fn stop_keyword_ends_the_endpoint_list() {
    let cfg = "cluster x forward 10.0.0.1 proto tcp type linemode ;\n";
    let clusters = parse(cfg, &[]);
    assert_eq!(clusters[0].endpoints, vec!["10.0.0.1:2003"]);
}

#[test]
fn file_routed_cluster_is_dropped() {
    let cfg = "cluster archive\n    file /var/lib/graphite/archive.db\n    ;\n";
    let clusters = parse(cfg, &[]);
    assert!(clusters.is_empty());
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let cfg = "# a comment\n\ncluster main forward 10.0.0.1 ; # trailing note\n";
    let clusters = parse(cfg, &[]);
    assert_eq!(clusters.len(), 1);
}

#[test]
fn multiple_clusters_in_one_file_are_all_parsed() {
    let cfg = "cluster a forward 10.0.0.1 ;\ncluster b forward 10.0.0.2 ;\n";
    let clusters = parse(cfg, &[]);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].name, "a");
    assert_eq!(clusters[1].name, "b");
}

#[test]
fn endpoint_list_spanning_multiple_lines_is_collected() {
    let cfg = "cluster main\n    forward\n    10.0.0.1\n    10.0.0.2\n    ;\n";
    let clusters = parse(cfg, &[]);
    assert_eq!(clusters[0].endpoints.len(), 2);
}

#[test]
fn cluster_with_no_endpoints_is_dropped() {
    let cfg = "cluster empty forward proto tcp ;\n";
    let clusters = parse(cfg, &[]);
    assert!(clusters.is_empty());
}

#[test]
fn trailing_cluster_without_a_final_newline_is_still_flushed() {
    let cfg = "cluster main forward 10.0.0.1 ;";
    let clusters = parse(cfg, &[]);
    assert_eq!(clusters.len(), 1);
}
