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

//! In-memory [`ChainReader`] for tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use crate::chain::{ChainError, ChainReader, GroupRegisteredEvent, ValidatorRecord};

/// Scripted chain state. Every field is public so tests can build exactly the state they need.
#[derive(Debug, Default)]
pub struct InMemoryChainReader {
    pub height: u64,
    pub slashing_multipliers: HashMap<Address, U256>,
    pub target_voting_yield: U256,
    pub rewards_multiplier: U256,
    pub registrations: Vec<GroupRegisteredEvent>,
    pub signers: Vec<Address>,
    pub signer_accounts: HashMap<Address, Address>,
    pub validators: HashMap<Address, ValidatorRecord>,
    /// Artificial latency per signer when resolving its account.
    pub resolve_delays: HashMap<Address, Duration>,
    /// When set, every read fails with a transport error.
    pub offline: bool,
    event_queries: Mutex<Vec<(u64, u64)>>,
}

impl InMemoryChainReader {
    /// Empty chain at `height`.
    pub fn at_height(height: u64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Register an elected validator: signer -> account -> record.
    pub fn with_validator(
        mut self,
        signer: Address,
        account: Address,
        name: &str,
        group: Address,
    ) -> Self {
        self.signers.push(signer);
        self.signer_accounts.insert(signer, account);
        self.validators.insert(
            account,
            ValidatorRecord {
                name: name.to_string(),
                address: account,
                affiliation: group,
            },
        );
        self
    }

    /// Ranges passed to `validator_group_registered_events`, in call order.
    pub fn event_queries(&self) -> Vec<(u64, u64)> {
        self.event_queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    fn online(&self) -> Result<(), ChainError> {
        if self.offline {
            return Err(ChainError::Transport("node unreachable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ChainReader for InMemoryChainReader {
    async fn current_height(&self) -> Result<u64, ChainError> {
        self.online()?;
        Ok(self.height)
    }

    async fn validator_group_slashing_multiplier(
        &self,
        group: Address,
    ) -> Result<U256, ChainError> {
        self.online()?;
        self.slashing_multipliers
            .get(&group)
            .copied()
            .ok_or_else(|| ChainError::InvalidArgument("execution reverted".to_string()))
    }

    async fn target_voting_yield_fraction(&self) -> Result<U256, ChainError> {
        self.online()?;
        Ok(self.target_voting_yield)
    }

    async fn rewards_multiplier(&self) -> Result<U256, ChainError> {
        self.online()?;
        Ok(self.rewards_multiplier)
    }

    async fn validator_group_registered_events(
        &self,
        from: u64,
        to: u64,
    ) -> Result<Vec<GroupRegisteredEvent>, ChainError> {
        self.online()?;
        if let Ok(mut q) = self.event_queries.lock() {
            q.push((from, to));
        }
        Ok(self
            .registrations
            .iter()
            .filter(|e| e.block_number >= from && e.block_number <= to)
            .cloned()
            .collect())
    }

    async fn elected_signers(&self) -> Result<Vec<Address>, ChainError> {
        self.online()?;
        Ok(self.signers.clone())
    }

    async fn signer_to_account(&self, signer: Address) -> Result<Address, ChainError> {
        self.online()?;
        if let Some(delay) = self.resolve_delays.get(&signer) {
            tokio::time::sleep(*delay).await;
        }
        self.signer_accounts
            .get(&signer)
            .copied()
            .ok_or_else(|| ChainError::InvalidArgument(format!("unknown signer {signer}")))
    }

    async fn validator_record(&self, account: Address) -> Result<ValidatorRecord, ChainError> {
        self.online()?;
        self.validators
            .get(&account)
            .cloned()
            .ok_or_else(|| ChainError::InvalidArgument(format!("not a validator {account}")))
    }
}
