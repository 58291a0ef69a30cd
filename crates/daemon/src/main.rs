// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Host-local availability monitor for a carbon relay: watches a set
//! of systemd units and carbon-relay endpoints and reacts to their
//! combined verdict by attaching/detaching virtual addresses and
//! running operator shell hooks.

mod checker_handle;
mod cli;
mod commands;
mod config;
mod logging;
mod monitor;
mod shutdown;

use std::collections::HashSet;
use std::io::BufReader;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use relaymon_core::{sanitize, Thresholds};
use relaymon_metrics::MetricQueue;
use relaymon_net::{Cluster, NetworkChecker};
use relaymon_procinfo::ServiceChecker;

use checker_handle::CheckerHandle;
use cli::{Cli, Command};
use config::Config;
use monitor::MonitorLoop;

const METRIC_QUEUE_CAPACITY: usize = 4096;
const METRIC_BATCH_SEND: usize = 32;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = match Config::load(&cli.config, cli.loglevel.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("configuration load: {e}");
            return ExitCode::from(1);
        }
    };

    logging::init(&cfg.log_level);

    run(cfg, cli.command).await
}

async fn run(cfg: Config, command: Option<Command>) -> ExitCode {
    match command {
        Some(Command::Evict) => {
            let failures = commands::evict::run(&cfg).await;
            ExitCode::from(failures.min(255) as u8)
        }
        Some(Command::WaitIp { timeout }) => {
            if commands::wait_ip::run(&cfg, timeout).await {
                ExitCode::from(0)
            } else {
                ExitCode::from(1)
            }
        }
        None => {
            run_monitor(cfg).await;
            ExitCode::from(0)
        }
    }
}

async fn run_monitor(cfg: Config) {
    let shutdown = shutdown::install();

    let thresholds = Thresholds {
        check_count: cfg.check_count,
        fail_count: cfg.fail_count,
        reset_count: cfg.reset_count,
    };

    let mut checkers: Vec<CheckerHandle> = cfg
        .services
        .iter()
        .map(|name| CheckerHandle::Service(ServiceChecker::new(name.clone(), thresholds)))
        .collect();

    if let Some(network) = build_carbon_c_relay_checker(&cfg, thresholds) {
        checkers.push(CheckerHandle::Network(network));
    }

    let hostname = sanitize(&cfg.resolved_hostname());
    let metric_prefix = format!("{}.{hostname}", cfg.prefix);

    let queue = Arc::new(MetricQueue::new(METRIC_QUEUE_CAPACITY));
    let sender = tokio::spawn(relaymon_metrics::run_sender(
        queue.clone(),
        cfg.graphite_relay.clone(),
        METRIC_BATCH_SEND,
        shutdown.clone(),
    ));

    let mut monitor = MonitorLoop::new(
        checkers,
        cfg.iface.clone(),
        cfg.ips.clone(),
        cfg.error_cmd.clone(),
        cfg.success_cmd.clone(),
        metric_prefix,
        queue,
        cfg.check_interval,
    );

    monitor.run(shutdown).await;
    let _ = sender.await;
}

fn build_carbon_c_relay_checker(cfg: &Config, thresholds: Thresholds) -> Option<NetworkChecker> {
    let path = cfg.carbon_c_relay.config.as_ref()?;
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(path = %path, error = %e, "carbon-c-relay: failed to open config");
            return None;
        }
    };

    let required: HashSet<String> = cfg.carbon_c_relay.required.iter().cloned().collect();
    let parsed = match relaymon_relayconfig::parse_clusters(BufReader::new(file), &required) {
        Ok(clusters) => clusters,
        Err(e) => {
            tracing::error!(path = %path, error = %e, "carbon-c-relay: failed to parse config");
            return None;
        }
    };

    if parsed.is_empty() {
        tracing::warn!(path = %path, "carbon-c-relay: config has no usable clusters");
        return None;
    }

    let clusters = parsed
        .into_iter()
        .map(|c| {
            let mut cluster = Cluster::new(c.name, c.required, cfg.net_timeout, cfg.prefix.clone());
            for endpoint in c.endpoints {
                cluster.push_endpoint(endpoint);
            }
            cluster
        })
        .collect();

    Some(NetworkChecker::new("carbon-c-relay clusters", clusters, thresholds))
}
