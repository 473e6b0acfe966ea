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

//! Response bodies.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use serde::Serialize;

use crate::core::types::{ElectedValidator, EpochIndex, ValidatorGroupRegistration};

#[derive(Debug, Serialize)]
pub struct EpochResponse {
    pub epoch: EpochIndex,
}

#[derive(Debug, Serialize)]
pub struct MultiplierResponse {
    pub multiplier: String,
}

#[derive(Debug, Serialize)]
pub struct TargetApyResponse {
    pub target_apy: String,
}

#[derive(Debug, Serialize)]
pub struct ElectedValidatorsResponse {
    pub validators: Vec<ElectedValidatorView>,
}

/// Elected validator with checksummed addresses.
#[derive(Debug, Serialize)]
pub struct ElectedValidatorView {
    pub name: String,
    pub address: String,
    pub group: String,
}

impl From<ElectedValidator> for ElectedValidatorView {
    fn from(v: ElectedValidator) -> Self {
        Self {
            name: v.name,
            address: v.address.to_checksum(None),
            group: v.group.to_checksum(None),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub block: u64,
    pub epoch: EpochIndex,
}

impl From<ValidatorGroupRegistration> for RegistrationResponse {
    fn from(r: ValidatorGroupRegistration) -> Self {
        Self {
            block: r.block,
            epoch: r.epoch,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}
