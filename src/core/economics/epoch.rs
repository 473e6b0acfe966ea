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

//! Block height to epoch index.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Blocks per epoch on mainnet.
pub const BLOCKS_PER_EPOCH: u64 = 17_280;

/// How a block inside an epoch maps to an index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpochRounding {
    /// `ceil(block / size)`: block `size` is the last block of epoch 1.
    #[default]
    Ceil,
    /// `floor(block / size)`.
    Floor,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EpochError {
    #[error("blocks per epoch must be non-zero")]
    ZeroEpochSize,
}

/// Maps block heights to epoch indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpochCalculator {
    blocks_per_epoch: u64,
    rounding: EpochRounding,
}

impl Default for EpochCalculator {
    fn default() -> Self {
        Self {
            blocks_per_epoch: BLOCKS_PER_EPOCH,
            rounding: EpochRounding::Ceil,
        }
    }
}

impl EpochCalculator {
    /// Calculator for `blocks_per_epoch`-sized epochs.
    pub fn new(blocks_per_epoch: u64, rounding: EpochRounding) -> Result<Self, EpochError> {
        if blocks_per_epoch == 0 {
            return Err(EpochError::ZeroEpochSize);
        }
        Ok(Self {
            blocks_per_epoch,
            rounding,
        })
    }

    /// Epoch size in blocks.
    pub fn blocks_per_epoch(&self) -> u64 {
        self.blocks_per_epoch
    }

    /// Rounding policy.
    pub fn rounding(&self) -> EpochRounding {
        self.rounding
    }

    /// Epoch containing `block`. Genesis (block 0) is epoch 0 under every policy.
    pub fn epoch_of(&self, block: u64) -> u64 {
        if block == 0 {
            return 0;
        }
        let quotient = block / self.blocks_per_epoch;
        match self.rounding {
            EpochRounding::Floor => quotient,
            EpochRounding::Ceil if block % self.blocks_per_epoch == 0 => quotient,
            EpochRounding::Ceil => quotient + 1,
        }
    }
}

/// Epoch of `block` with mainnet parameters.
pub fn epoch_of(block: u64) -> u64 {
    EpochCalculator::default().epoch_of(block)
}
