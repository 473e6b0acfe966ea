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

use tracing::debug;

use crate::chain::{parse_address, ChainError, ChainReader};
use crate::core::economics::{decimal::Decimal, epoch::EpochCalculator};
use crate::core::lookup::big;
use crate::core::types::ValidatorGroupRegistration;

/// First block scanned for registrations.
pub const REGISTRATION_SCAN_START: u64 = 1;

/// Slashing multiplier and registration facts for a validator group.
#[derive(Clone)]
pub struct ValidatorGroupLookup {
    reader: Arc<dyn ChainReader>,
    epochs: EpochCalculator,
    log_chunk_size: u64,
}

impl ValidatorGroupLookup {
    /// `log_chunk_size == 0` scans the whole history in one request.
    pub fn new(reader: Arc<dyn ChainReader>, epochs: EpochCalculator, log_chunk_size: u64) -> Self {
        Self {
            reader,
            epochs,
            log_chunk_size,
        }
    }

    /// Current downtime slashing multiplier of `address`, in `(0, 1]`.
    ///
    /// Unparseable addresses fail with [`ChainError::InvalidArgument`] without touching the
    /// network, the same classification a contract revert for an unknown group gets.
    pub async fn slashing_multiplier_of(&self, address: &str) -> Result<Decimal, ChainError> {
        let group = parse_address(address)?;
        let raw = self.reader.validator_group_slashing_multiplier(group).await?;
        Ok(Decimal::from_fixidity(big(raw)))
    }

    /// Block and epoch of the group's `ValidatorGroupRegistered` event, if any.
    ///
    /// Scans every registration since block 1 on each call: cost grows with the total number
    /// of registrations ever emitted.
    pub async fn registration_of(
        &self,
        address: &str,
    ) -> Result<Option<ValidatorGroupRegistration>, ChainError> {
        let group = parse_address(address)?;
        let head = self.reader.current_height().await?;
        if head < REGISTRATION_SCAN_START {
            return Ok(None);
        }

        let step = if self.log_chunk_size == 0 {
            head - REGISTRATION_SCAN_START + 1
        } else {
            self.log_chunk_size
        };

        let mut from = REGISTRATION_SCAN_START;
        loop {
            let to = from.saturating_add(step - 1).min(head);
            let events = self.reader.validator_group_registered_events(from, to).await?;

            // Addresses compare as bytes, so hex letter case never matters.
            if let Some(event) = events.iter().find(|e| e.group == group) {
                debug!(%group, block = event.block_number, "validator group registration found");
                return Ok(Some(ValidatorGroupRegistration {
                    block: event.block_number,
                    epoch: self.epochs.epoch_of(event.block_number),
                }));
            }

            if to >= head {
                break;
            }
            from = to + 1;
        }

        debug!(%group, head, "no validator group registration");
        Ok(None)
    }
}
