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

use std::sync::Arc;

use crate::chain::{ChainError, ChainReader};
use crate::core::economics::{decimal::Decimal, target_yield::target_apy};
use crate::core::lookup::big;

/// Reads the yield parameters and annualizes them.
#[derive(Clone)]
pub struct TargetYieldLookup {
    reader: Arc<dyn ChainReader>,
}

impl TargetYieldLookup {
    /// Read yield parameters through `reader`.
    pub fn new(reader: Arc<dyn ChainReader>) -> Self {
        Self { reader }
    }

    /// Current target APY in percent. Both parameters are read fresh on every call.
    pub async fn current_target_apy(&self) -> Result<Decimal, ChainError> {
        let (target, multiplier) = tokio::try_join!(
            self.reader.target_voting_yield_fraction(),
            self.reader.rewards_multiplier(),
        )?;
        Ok(target_apy(&big(target), &big(multiplier)))
    }
}
