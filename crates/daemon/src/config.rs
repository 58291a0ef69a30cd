// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk YAML configuration, its defaults, and load-time validation.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("parsing {path}: {source}")]
    Parse { path: String, source: serde_yaml::Error },
    #[error("configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarbonCRelayConfig {
    #[serde(default)]
    pub config: Option<String>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl Default for CarbonCRelayConfig {
    fn default() -> Self {
        Self { config: None, required: Vec::new() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,

    #[serde(with = "humantime_serde")]
    pub check_interval: Duration,

    pub check_count: u32,
    pub fail_count: u32,
    pub reset_count: u32,

    #[serde(with = "humantime_serde")]
    pub net_timeout: Duration,

    pub error_cmd: String,
    pub success_cmd: String,

    pub iface: String,
    pub ips: Vec<String>,

    pub carbon_c_relay: CarbonCRelayConfig,

    pub services: Vec<String>,
    /// The relay's own unit, stopped during `evict`.
    pub service: String,

    pub graphite_relay: String,
    pub prefix: String,
    /// Overrides the OS-resolved hostname used in the metric prefix.
    pub hostname: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            check_interval: Duration::from_secs(10),
            check_count: 6,
            fail_count: 3,
            reset_count: 4,
            net_timeout: Duration::from_secs(1),
            error_cmd: String::new(),
            success_cmd: String::new(),
            iface: "lo".to_string(),
            ips: Vec::new(),
            carbon_c_relay: CarbonCRelayConfig::default(),
            services: Vec::new(),
            service: String::new(),
            graphite_relay: "127.0.0.1:2003".to_string(),
            prefix: "graphite.relaymon".to_string(),
            hostname: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path, override_log_level: Option<&str>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read { path: path.display().to_string(), source: e })?;
        let mut cfg: Config = serde_yaml::from_str(&text)
            .map_err(|e| ConfigError::Parse { path: path.display().to_string(), source: e })?;

        if let Some(level) = override_log_level {
            cfg.log_level = level.to_string();
        }

        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.iface.is_empty() {
            return Err(ConfigError::Invalid("iface empty"));
        }
        if self.services.is_empty() {
            return Err(ConfigError::Invalid("services empty"));
        }
        if self.error_cmd.is_empty() && self.ips.is_empty() {
            return Err(ConfigError::Invalid("error_cmd or ips empty"));
        }
        if self.success_cmd.is_empty() && self.ips.is_empty() {
            return Err(ConfigError::Invalid("success_cmd or ips empty"));
        }
        Ok(())
    }

    /// Hostname used in the metric prefix: the configured override, or
    /// the OS-reported hostname.
    pub fn resolved_hostname(&self) -> String {
        if let Some(h) = &self.hostname {
            return h.clone();
        }
        nix::unistd::gethostname()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
