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

//! Request-scoped value types and the service configuration tree.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::core::economics::epoch::{EpochRounding, BLOCKS_PER_EPOCH};

/// Block number.
pub type BlockHeight = u64;

/// Epoch index derived from a [`BlockHeight`].
pub type EpochIndex = u64;

/// Where a validator group's `ValidatorGroupRegistered` event was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatorGroupRegistration {
    /// Emitting block.
    pub block: BlockHeight,
    /// Epoch of `block`.
    pub epoch: EpochIndex,
}

/// Member of the currently elected validator set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElectedValidator {
    /// Account metadata name.
    pub name: String,
    /// Validator account address.
    pub address: Address,
    /// Affiliated validator group.
    pub group: Address,
}

/// Service configuration root.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// HTTP listener.
    #[serde(default)]
    pub http: HttpConfig,
    /// Chain access.
    #[serde(default)]
    pub chain: ChainConfig,
    /// Epoch arithmetic.
    #[serde(default)]
    pub epoch: EpochConfig,
    /// Log output.
    #[serde(default)]
    pub log: LogConfig,
}

/// HTTP config.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Listen address, e.g. 0.0.0.0:5000.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

/// Chain access config.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// JSON-RPC endpoint.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Registry contract used to resolve core contract addresses.
    #[serde(default = "default_registry_address")]
    pub registry_address: String,
    /// Max blocks per `eth_getLogs` request during registration scans (0 => one request).
    #[serde(default)]
    pub log_chunk_size: u64,
    /// Pinned core contract addresses; unset entries are resolved through the registry.
    #[serde(default)]
    pub contracts: ContractsConfig,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            registry_address: default_registry_address(),
            log_chunk_size: 0,
            contracts: ContractsConfig::default(),
        }
    }
}

/// Optional pinned contract addresses (hex).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractsConfig {
    /// Validators contract.
    #[serde(default)]
    pub validators: Option<String>,
    /// EpochRewards contract.
    #[serde(default)]
    pub epoch_rewards: Option<String>,
    /// Election contract.
    #[serde(default)]
    pub election: Option<String>,
    /// Accounts contract.
    #[serde(default)]
    pub accounts: Option<String>,
}

impl ContractsConfig {
    /// Pinned entries as `(name, address)` pairs.
    pub fn pinned(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("validators", self.validators.as_deref()),
            ("epoch_rewards", self.epoch_rewards.as_deref()),
            ("election", self.election.as_deref()),
            ("accounts", self.accounts.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, v)| v.map(|v| (name, v)))
    }
}

/// Epoch config.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpochConfig {
    /// Blocks per epoch.
    #[serde(default = "default_blocks_per_epoch")]
    pub blocks_per_epoch: u64,
    /// Rounding policy for blocks inside an epoch.
    #[serde(default)]
    pub rounding: EpochRounding,
}

impl Default for EpochConfig {
    fn default() -> Self {
        Self {
            blocks_per_epoch: default_blocks_per_epoch(),
            rounding: EpochRounding::default(),
        }
    }
}

/// Log config.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Emit JSON lines instead of compact text.
    #[serde(default)]
    pub json: bool,
    /// `EnvFilter` directives, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            json: false,
            filter: default_log_filter(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_rpc_url() -> String {
    "https://forno.celo.org".to_string()
}

fn default_registry_address() -> String {
    "0x000000000000000000000000000000000000ce10".to_string()
}

fn default_blocks_per_epoch() -> u64 {
    BLOCKS_PER_EPOCH
}

fn default_log_filter() -> String {
    "stakewatch=info,tower_http=info".to_string()
}
