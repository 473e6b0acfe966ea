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

use alloy::primitives::Address;
use futures::future::try_join_all;
use tracing::debug;

use crate::chain::{ChainError, ChainReader};
use crate::core::types::ElectedValidator;

/// Resolves the elected signer set to validator records.
#[derive(Clone)]
pub struct ElectedValidatorsLookup {
    reader: Arc<dyn ChainReader>,
}

impl ElectedValidatorsLookup {
    /// Resolve elected signers through `reader`.
    pub fn new(reader: Arc<dyn ChainReader>) -> Self {
        Self { reader }
    }

    /// Elected validators in the chain's signer order.
    ///
    /// Signers resolve concurrently; the output is indexed by signer position, not by
    /// completion order. Any failed resolution fails the whole set.
    pub async fn current_elected(&self) -> Result<Vec<ElectedValidator>, ChainError> {
        let signers = self.reader.elected_signers().await?;
        debug!(count = signers.len(), "resolving elected signers");

        try_join_all(signers.into_iter().map(|signer| self.resolve(signer))).await
    }

    async fn resolve(&self, signer: Address) -> Result<ElectedValidator, ChainError> {
        let account = self.reader.signer_to_account(signer).await?;
        let record = self.reader.validator_record(account).await?;
        Ok(ElectedValidator {
            name: record.name,
            address: record.address,
            group: record.affiliation,
        })
    }
}
