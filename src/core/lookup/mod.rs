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

//! Lookups composed from [`crate::chain::ChainReader`] reads.
//!
//! Every lookup owns a shared reader handle and holds no other state; failures propagate
//! unchanged to the caller.

use alloy::primitives::U256;
use num_bigint::BigUint;

/// Currently elected validator set.
pub mod elected;
/// Network target yield.
pub mod rewards;
/// Validator group facts.
pub mod validator_group;

pub use elected::ElectedValidatorsLookup;
pub use rewards::TargetYieldLookup;
pub use validator_group::ValidatorGroupLookup;

/// Raw uint256 contract value as a big integer.
pub(crate) fn big(raw: U256) -> BigUint {
    BigUint::from_bytes_be(&raw.to_be_bytes::<32>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_full_width_values() {
        assert_eq!(big(U256::ZERO), BigUint::from(0u32));
        assert_eq!(big(U256::from(17_280u64)), BigUint::from(17_280u32));
        let max = big(U256::MAX);
        assert_eq!(max + 1u32, BigUint::from(2u32).pow(256));
    }
}
