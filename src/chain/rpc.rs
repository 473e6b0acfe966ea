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

//! JSON-RPC backed [`ChainReader`].
//!
//! One HTTP provider is shared by every request. Core contract addresses are resolved once
//! through the Registry at startup, or pinned in config for networks without a Registry.

use alloy::{
    contract,
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::Filter,
    sol_types::SolEvent,
    transports::{RpcError, TransportErrorKind},
};
use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::chain::{
    contracts::{
        IAccounts, IElection, IEpochRewards, IRegistry, IValidators, ACCOUNTS, ELECTION,
        EPOCH_REWARDS, VALIDATORS,
    },
    parse_address, ChainError, ChainReader, GroupRegisteredEvent, ValidatorRecord,
};
use crate::core::types::ChainConfig;

/// Addresses of the core contracts read by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoreContracts {
    /// Validators contract.
    pub validators: Address,
    /// EpochRewards contract.
    pub epoch_rewards: Address,
    /// Election contract.
    pub election: Address,
    /// Accounts contract.
    pub accounts: Address,
}

/// Chain reader over an HTTP JSON-RPC endpoint.
pub struct RpcChainReader {
    provider: DynProvider,
    contracts: CoreContracts,
}

impl RpcChainReader {
    /// Connect to `cfg.rpc_url` and resolve core contract addresses.
    pub async fn connect(cfg: &ChainConfig) -> Result<Self, ChainError> {
        let url = Url::parse(&cfg.rpc_url)
            .map_err(|e| ChainError::InvalidArgument(format!("rpc url: {e}")))?;
        let provider = ProviderBuilder::new().connect_http(url).erased();
        let registry = parse_address(&cfg.registry_address)?;

        let pinned = &cfg.contracts;
        let contracts = CoreContracts {
            validators: resolve(&provider, registry, VALIDATORS, pinned.validators.as_deref())
                .await?,
            epoch_rewards: resolve(
                &provider,
                registry,
                EPOCH_REWARDS,
                pinned.epoch_rewards.as_deref(),
            )
            .await?,
            election: resolve(&provider, registry, ELECTION, pinned.election.as_deref()).await?,
            accounts: resolve(&provider, registry, ACCOUNTS, pinned.accounts.as_deref()).await?,
        };
        info!(?contracts, rpc = %cfg.rpc_url, "core contracts resolved");

        Ok(Self::with_contracts(provider, contracts))
    }

    /// Build from an existing provider and known addresses.
    pub fn with_contracts(provider: DynProvider, contracts: CoreContracts) -> Self {
        Self {
            provider,
            contracts,
        }
    }

    /// Resolved contract addresses.
    pub fn contracts(&self) -> CoreContracts {
        self.contracts
    }
}

async fn resolve(
    provider: &DynProvider,
    registry: Address,
    name: &'static str,
    pinned: Option<&str>,
) -> Result<Address, ChainError> {
    if let Some(raw) = pinned {
        let address = parse_address(raw)?;
        debug!(contract = name, %address, "using pinned contract address");
        return Ok(address);
    }
    IRegistry::new(registry, provider)
        .getAddressForStringOrDie(name.to_string())
        .call()
        .await
        .map_err(read_error)
}

fn transport(err: RpcError<TransportErrorKind>) -> ChainError {
    ChainError::Transport(err.to_string())
}

fn is_revert(err: &contract::Error) -> bool {
    match err {
        contract::Error::TransportError(RpcError::ErrorResp(payload)) => {
            payload.as_revert_data().is_some() || payload.message.contains("execution reverted")
        }
        _ => false,
    }
}

/// Failure of a call whose only input is fixed by the service.
fn read_error(err: contract::Error) -> ChainError {
    ChainError::Transport(err.to_string())
}

/// Failure of a call that carries a caller-supplied address. Only a contract revert
/// blames the argument; node and transport failures stay transport errors.
fn argument_error(err: contract::Error) -> ChainError {
    if is_revert(&err) {
        ChainError::InvalidArgument(err.to_string())
    } else {
        ChainError::Transport(err.to_string())
    }
}

#[async_trait]
impl ChainReader for RpcChainReader {
    async fn current_height(&self) -> Result<u64, ChainError> {
        self.provider.get_block_number().await.map_err(transport)
    }

    async fn validator_group_slashing_multiplier(
        &self,
        group: Address,
    ) -> Result<U256, ChainError> {
        IValidators::new(self.contracts.validators, &self.provider)
            .getValidatorGroupSlashingMultiplier(group)
            .call()
            .await
            .map_err(argument_error)
    }

    async fn target_voting_yield_fraction(&self) -> Result<U256, ChainError> {
        let params = IEpochRewards::new(self.contracts.epoch_rewards, &self.provider)
            .getTargetVotingYieldParameters()
            .call()
            .await
            .map_err(read_error)?;
        Ok(params._0)
    }

    async fn rewards_multiplier(&self) -> Result<U256, ChainError> {
        IEpochRewards::new(self.contracts.epoch_rewards, &self.provider)
            .getRewardsMultiplier()
            .call()
            .await
            .map_err(read_error)
    }

    async fn validator_group_registered_events(
        &self,
        from: u64,
        to: u64,
    ) -> Result<Vec<GroupRegisteredEvent>, ChainError> {
        let filter = Filter::new()
            .address(self.contracts.validators)
            .event_signature(IValidators::ValidatorGroupRegistered::SIGNATURE_HASH)
            .from_block(from)
            .to_block(to);

        debug!(from, to, "fetching ValidatorGroupRegistered logs");
        let logs = self.provider.get_logs(&filter).await.map_err(transport)?;

        // `group` is the only indexed field, so it sits in topic 1.
        let events: Vec<GroupRegisteredEvent> = logs
            .iter()
            .filter_map(|log| {
                let block_number = log.block_number?;
                let topic = log.inner.data.topics().get(1)?;
                Some(GroupRegisteredEvent {
                    block_number,
                    group: Address::from_word(*topic),
                })
            })
            .collect();
        debug!(from, to, count = events.len(), "fetched registration events");
        Ok(events)
    }

    async fn elected_signers(&self) -> Result<Vec<Address>, ChainError> {
        IElection::new(self.contracts.election, &self.provider)
            .getCurrentValidatorSigners()
            .call()
            .await
            .map_err(read_error)
    }

    async fn signer_to_account(&self, signer: Address) -> Result<Address, ChainError> {
        IAccounts::new(self.contracts.accounts, &self.provider)
            .validatorSignerToAccount(signer)
            .call()
            .await
            .map_err(argument_error)
    }

    async fn validator_record(&self, account: Address) -> Result<ValidatorRecord, ChainError> {
        let validators = IValidators::new(self.contracts.validators, &self.provider);
        let accounts = IAccounts::new(self.contracts.accounts, &self.provider);
        let validator_call = validators.getValidator(account);
        let name_call = accounts.getName(account);

        let (validator, name) = tokio::try_join!(
            async { validator_call.call().await },
            async { name_call.call().await },
        )
        .map_err(argument_error)?;

        Ok(ValidatorRecord {
            name,
            address: account,
            affiliation: validator.affiliation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{Bytes, LogData},
        rpc::types::Log,
        transports::mock::Asserter,
    };

    const UNIT: u128 = 1_000_000_000_000_000_000_000_000;

    fn mocked() -> (Asserter, RpcChainReader) {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new()
            .connect_mocked_client(asserter.clone())
            .erased();
        let contracts = CoreContracts {
            validators: Address::repeat_byte(0x01),
            epoch_rewards: Address::repeat_byte(0x02),
            election: Address::repeat_byte(0x03),
            accounts: Address::repeat_byte(0x04),
        };
        (asserter, RpcChainReader::with_contracts(provider, contracts))
    }

    fn word(value: U256) -> Bytes {
        Bytes::from(value.to_be_bytes::<32>().to_vec())
    }

    #[tokio::test]
    async fn slashing_multiplier_decodes_word() {
        let (asserter, reader) = mocked();
        asserter.push_success(&word(U256::from(UNIT)));
        let m = reader
            .validator_group_slashing_multiplier(Address::repeat_byte(0xaa))
            .await
            .unwrap();
        assert_eq!(m, U256::from(UNIT));
    }

    #[tokio::test]
    async fn revert_on_address_call_is_invalid_argument() {
        let (asserter, reader) = mocked();
        asserter.push_failure_msg("execution reverted");
        let err = reader
            .validator_group_slashing_multiplier(Address::repeat_byte(0xaa))
            .await
            .unwrap_err();
        assert!(matches!(err, ChainError::InvalidArgument(_)), "{err:?}");

        asserter.push_failure_msg("execution reverted: not a validator");
        let err = reader
            .signer_to_account(Address::repeat_byte(0xbb))
            .await
            .unwrap_err();
        assert!(matches!(err, ChainError::InvalidArgument(_)), "{err:?}");
    }

    #[tokio::test]
    async fn node_error_on_address_call_is_transport() {
        let (asserter, reader) = mocked();
        asserter.push_failure_msg("header not found");
        let err = reader
            .validator_group_slashing_multiplier(Address::repeat_byte(0xaa))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "transport");
    }

    #[tokio::test]
    async fn node_error_on_fixed_input_call_is_transport() {
        let (asserter, reader) = mocked();
        asserter.push_failure_msg("header not found");
        let err = reader.target_voting_yield_fraction().await.unwrap_err();
        assert_eq!(err.kind(), "transport");

        // Even a revert cannot blame an argument the caller never supplied.
        asserter.push_failure_msg("execution reverted");
        let err = reader.elected_signers().await.unwrap_err();
        assert_eq!(err.kind(), "transport");
    }

    #[tokio::test]
    async fn log_query_failure_is_transport() {
        let (asserter, reader) = mocked();
        asserter.push_failure_msg("query returned more than 10000 results");
        let err = reader
            .validator_group_registered_events(1, 9_000_000)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "transport");
    }

    #[tokio::test]
    async fn registration_group_comes_from_first_indexed_topic() {
        let (asserter, reader) = mocked();
        let group = Address::repeat_byte(0xaa);
        let log = Log {
            inner: alloy::primitives::Log {
                address: Address::repeat_byte(0x01),
                data: LogData::new_unchecked(
                    vec![
                        IValidators::ValidatorGroupRegistered::SIGNATURE_HASH,
                        group.into_word(),
                    ],
                    word(U256::from(100u64)),
                ),
            },
            block_number: Some(34_561),
            ..Default::default()
        };
        asserter.push_success(&vec![log]);

        let events = reader.validator_group_registered_events(1, 40_000).await.unwrap();
        assert_eq!(
            events,
            vec![GroupRegisteredEvent {
                block_number: 34_561,
                group,
            }]
        );
    }
}
