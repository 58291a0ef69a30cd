// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Parses `carbon-c-relay`'s routing configuration well enough to
//! recover the cluster topology it describes, without understanding
//! the routing rules themselves.
//!
//! The dialect is whitespace-tokenized, `#` starts a line comment, and
//! a `cluster <name> ... ;` block lists routers and endpoints before
//! the endpoint list is terminated by a bare `;` or a `proto`/`type`/
//! `transport` clause. We only care about the endpoint list.

use std::collections::HashSet;
use std::io::{self, BufRead};

/// Router/balancer keywords that consume exactly one token and carry
/// no endpoint of their own.
const SKIP_ONE: &[&str] = &[
    "forward",
    "any_of",
    "failover",
    "useall",
    "carbon_ch",
    "fnv1a_ch",
    "jump_fnv1a_ch",
    "lb",
    "dynamic",
];

/// Keywords that consume the following token as well (their own
/// argument), so the endpoint list resumes two tokens later.
const SKIP_TWO: &[&str] = &["replication"];

/// Keywords that end the endpoint list for this cluster line.
const STOP: &[&str] = &["proto", "type", "transport"];

const DEFAULT_PORT: &str = "2003";

/// One `cluster` block's topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    pub name: String,
    pub required: bool,
    pub endpoints: Vec<String>,
}

/// Parse every `cluster` block out of a carbon-c-relay config.
///
/// `required` names the clusters the monitor must treat as mandatory;
/// everything else is optional. Clusters that route to `file` targets
/// or that end up with no endpoints are silently dropped, matching
/// the relay's own notion of "nothing here worth monitoring".
pub fn parse_clusters<R: BufRead>(
    reader: R,
    required: &HashSet<String>,
) -> io::Result<Vec<ClusterConfig>> {
    let mut clusters = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut collecting = false;

    for line in reader.lines() {
        let raw = line?;
        let stripped = raw.split('#').next().unwrap_or("").trim_end_matches(['\r', '\n']);

        if collecting {
            for tok in stripped.split(' ') {
                if tok.is_empty() {
                    continue;
                }
                if tok == ";" {
                    collecting = false;
                    break;
                }
                current.push(tok.to_string());
            }
        } else if stripped.starts_with("cluster ") {
            if !current.is_empty() {
                if let Some(cluster) = build_cluster(&current, required) {
                    clusters.push(cluster);
                }
                current.clear();
            }
            let mut terminated_on_this_line = false;
            for tok in stripped.split(' ') {
                if tok.is_empty() {
                    continue;
                }
                if tok == ";" {
                    terminated_on_this_line = true;
                    break;
                }
                current.push(tok.to_string());
            }
            collecting = !terminated_on_this_line;
        }
    }

    if !current.is_empty() {
        if let Some(cluster) = build_cluster(&current, required) {
            clusters.push(cluster);
        }
    }

    Ok(clusters)
}

/// Build a cluster from its raw `cluster <name> <router> <endpoints...>`
/// token list. Returns `None` for `file`-routed or empty clusters,
/// which aren't network endpoints worth checking.
fn build_cluster(fields: &[String], required: &HashSet<String>) -> Option<ClusterConfig> {
    if fields.len() < 4 {
        return None;
    }
    let name = fields[1].clone();
    let is_required = required.contains(&name);
    let mut endpoints = Vec::new();

    let mut i = 2;
    while i < fields.len() {
        let tok = fields[i].as_str();
        if tok == "file" {
            return None;
        }
        if SKIP_ONE.contains(&tok) {
            i += 1;
            continue;
        }
        if SKIP_TWO.contains(&tok) {
            i += 2;
            continue;
        }
        if STOP.contains(&tok) {
            break;
        }

        let before_eq = tok.split('=').next().unwrap_or(tok);
        let mut parts = before_eq.splitn(3, ':');
        let host = parts.next().unwrap_or(before_eq);
        let port = parts.next().unwrap_or(DEFAULT_PORT);
        endpoints.push(format!("{host}:{port}"));

        i += 1;
    }

    if endpoints.is_empty() {
        tracing::warn!(cluster = %name, "cluster config has no usable endpoints, skipping");
        return None;
    }

    Some(ClusterConfig { name, required: is_required, endpoints })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
