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

//! ABI bindings for the subset of core contracts the service reads.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use alloy::primitives::{address, Address};
use alloy::sol;

/// Well-known Registry proxy address on every network.
pub const REGISTRY_ADDRESS: Address = address!("000000000000000000000000000000000000ce10");

/// Registry identifiers of the contracts resolved at startup.
pub const VALIDATORS: &str = "Validators";
pub const EPOCH_REWARDS: &str = "EpochRewards";
pub const ELECTION: &str = "Election";
pub const ACCOUNTS: &str = "Accounts";

sol! {
    #[sol(rpc)]
    interface IRegistry {
        function getAddressForStringOrDie(string calldata identifier) external view returns (address);
    }

    #[sol(rpc)]
    interface IValidators {
        event ValidatorGroupRegistered(address indexed group, uint256 commission);

        function getValidatorGroupSlashingMultiplier(address account) external view returns (uint256);

        function getValidator(address account)
            external
            view
            returns (
                bytes memory ecdsaPublicKey,
                bytes memory blsPublicKey,
                address affiliation,
                uint256 score,
                address signer
            );
    }

    #[sol(rpc)]
    interface IEpochRewards {
        function getTargetVotingYieldParameters() external view returns (uint256, uint256, uint256);

        function getRewardsMultiplier() external view returns (uint256);
    }

    #[sol(rpc)]
    interface IElection {
        function getCurrentValidatorSigners() external view returns (address[] memory);
    }

    #[sol(rpc)]
    interface IAccounts {
        function validatorSignerToAccount(address signer) external view returns (address);

        function getName(address account) external view returns (string memory);
    }
}
