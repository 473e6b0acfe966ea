// Copyright (c) 2026 Stakewatch
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Configuration loading.
//!
//! ## Sources (later wins)
//! 1. Built-in defaults (mainnet RPC, `0.0.0.0:5000`, 17280 blocks per epoch, `ceil`).
//! 2. TOML file named by `STAKEWATCH_CONFIG`:
//!
//! ```text
//! [http]
//! listen_addr = "0.0.0.0:5000"
//!
//! [chain]
//! rpc_url = "https://forno.celo.org"
//! log_chunk_size = 0
//!
//! [chain.contracts]
//! validators = "0x..."      # optional, skips registry resolution
//!
//! [epoch]
//! blocks_per_epoch = 17280
//! rounding = "ceil"         # or "floor"
//!
//! [log]
//! json = false
//! ```
//!
//! 3. Environment: `STAKEWATCH_RPC_URL`, `STAKEWATCH_LISTEN_ADDR`, `STAKEWATCH_LOG_JSON`,
//!    `STAKEWATCH_LOG_FILTER`.

use std::fs;
use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::chain::parse_address;
use crate::core::types::ServiceConfig;

/// Env var naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "STAKEWATCH_CONFIG";

/// Config errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Cannot read config file.
    #[error("read config {path}: {reason}")]
    Read {
        /// File path.
        path: String,
        /// I/O error text.
        reason: String,
    },
    /// Cannot parse TOML.
    #[error("parse config: {0}")]
    Parse(String),
    /// A value is out of range or malformed.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Dotted field path.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Parse and validate a TOML document.
pub fn from_toml_str(s: &str) -> Result<ServiceConfig, ConfigError> {
    let cfg: ServiceConfig = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Load a TOML file.
pub fn load_file(path: &str) -> Result<ServiceConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    from_toml_str(&s)
}

/// Resolve the effective config from the process environment.
pub fn load_from_env() -> Result<ServiceConfig, ConfigError> {
    let cfg = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_file(&path)?,
        Err(_) => ServiceConfig::default(),
    };
    let cfg = apply_overrides(cfg, |key| std::env::var(key).ok());
    validate(&cfg)?;
    Ok(cfg)
}

/// Apply `STAKEWATCH_*` overrides read through `lookup`.
pub fn apply_overrides<F>(mut cfg: ServiceConfig, lookup: F) -> ServiceConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("STAKEWATCH_RPC_URL") {
        cfg.chain.rpc_url = v;
    }
    if let Some(v) = lookup("STAKEWATCH_LISTEN_ADDR") {
        cfg.http.listen_addr = v;
    }
    if let Some(v) = lookup("STAKEWATCH_LOG_JSON") {
        cfg.log.json = matches!(v.trim(), "1" | "true" | "yes");
    }
    if let Some(v) = lookup("STAKEWATCH_LOG_FILTER") {
        cfg.log.filter = v;
    }
    cfg
}

/// Reject configs the service cannot start with.
pub fn validate(cfg: &ServiceConfig) -> Result<(), ConfigError> {
    cfg.http
        .listen_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::Invalid {
            field: "http.listen_addr",
            reason: e.to_string(),
        })?;

    Url::parse(&cfg.chain.rpc_url).map_err(|e| ConfigError::Invalid {
        field: "chain.rpc_url",
        reason: e.to_string(),
    })?;

    parse_address(&cfg.chain.registry_address).map_err(|e| ConfigError::Invalid {
        field: "chain.registry_address",
        reason: e.to_string(),
    })?;

    for (_, raw) in cfg.chain.contracts.pinned() {
        parse_address(raw).map_err(|e| ConfigError::Invalid {
            field: "chain.contracts",
            reason: e.to_string(),
        })?;
    }

    if cfg.epoch.blocks_per_epoch == 0 {
        return Err(ConfigError::Invalid {
            field: "epoch.blocks_per_epoch",
            reason: "must be non-zero".to_string(),
        });
    }
    Ok(())
}
