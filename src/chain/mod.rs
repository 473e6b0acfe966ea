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

//! Read-only access to core contract state.
//!
//! [`ChainReader`] is the only seam between the service and the network. The RPC-backed
//! implementation lives in [`rpc`]; tests substitute [`memory::InMemoryChainReader`].

use std::str::FromStr;

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use thiserror::Error;

pub mod contracts;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod rpc;

/// Chain read failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// The read was rejected for its arguments (malformed address, contract revert).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The node could not be reached or answered with a non-call error.
    #[error("transport: {0}")]
    Transport(String),
}

impl ChainError {
    /// Stable label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ChainError::InvalidArgument(_) => "invalid_argument",
            ChainError::Transport(_) => "transport",
        }
    }
}

/// Parse a hex address (with or without `0x`, any letter case).
pub fn parse_address(raw: &str) -> Result<Address, ChainError> {
    Address::from_str(raw.trim())
        .map_err(|e| ChainError::InvalidArgument(format!("address {raw:?}: {e}")))
}

/// A `ValidatorGroupRegistered` log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupRegisteredEvent {
    /// Block that emitted the event.
    pub block_number: u64,
    /// Registered group address.
    pub group: Address,
}

/// Validator record as stored by the Validators and Accounts contracts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorRecord {
    /// Account metadata name.
    pub name: String,
    /// Validator account address.
    pub address: Address,
    /// Affiliated validator group (zero address when unaffiliated).
    pub affiliation: Address,
}

/// Typed reads against the core contracts.
///
/// Fixed-point values are returned raw (scaled by `10^24`); conversion happens in
/// [`crate::core::economics`].
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Latest block number.
    async fn current_height(&self) -> Result<u64, ChainError>;

    /// `Validators.getValidatorGroupSlashingMultiplier(group)`.
    async fn validator_group_slashing_multiplier(&self, group: Address)
        -> Result<U256, ChainError>;

    /// First element of `EpochRewards.getTargetVotingYieldParameters()`.
    async fn target_voting_yield_fraction(&self) -> Result<U256, ChainError>;

    /// `EpochRewards.getRewardsMultiplier()`.
    async fn rewards_multiplier(&self) -> Result<U256, ChainError>;

    /// `ValidatorGroupRegistered` events in `[from, to]`, in chain order.
    async fn validator_group_registered_events(
        &self,
        from: u64,
        to: u64,
    ) -> Result<Vec<GroupRegisteredEvent>, ChainError>;

    /// Signers of the currently elected validator set, in chain order.
    async fn elected_signers(&self) -> Result<Vec<Address>, ChainError>;

    /// Account that authorized `signer` as its validator signer.
    async fn signer_to_account(&self, signer: Address) -> Result<Address, ChainError>;

    /// Validator record for `account`.
    async fn validator_record(&self, account: Address) -> Result<ValidatorRecord, ChainError>;
}
