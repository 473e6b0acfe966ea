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
#![allow(missing_docs)]

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::{
    error::ApiError,
    models::{
        ElectedValidatorsResponse, EpochResponse, HealthResponse, MultiplierResponse,
        RegistrationResponse, TargetApyResponse,
    },
    AppState,
};

/// GET /current-epoch
pub async fn current_epoch(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EpochResponse>, ApiError> {
    let height = state
        .reader
        .current_height()
        .await
        .map_err(|e| state.chain_failure(e))?;
    state.metrics.observe_height(height);

    Ok(Json(EpochResponse {
        epoch: state.epochs.epoch_of(height),
    }))
}

/// GET /downtime-score/:address
pub async fn downtime_score(
    State(state): State<Arc<AppState>>,
    address: Result<Path<String>, PathRejection>,
) -> Result<Json<MultiplierResponse>, ApiError> {
    let Path(address) = address?;
    let multiplier = state
        .groups
        .slashing_multiplier_of(&address)
        .await
        .map_err(|e| state.chain_failure(e))?;

    Ok(Json(MultiplierResponse {
        multiplier: multiplier.to_string(),
    }))
}

/// GET /target-apy
pub async fn target_apy(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TargetApyResponse>, ApiError> {
    let apy = state
        .rewards
        .current_target_apy()
        .await
        .map_err(|e| state.chain_failure(e))?;

    Ok(Json(TargetApyResponse {
        target_apy: apy.to_string(),
    }))
}

/// GET /elected-validators
pub async fn elected_validators(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ElectedValidatorsResponse>, ApiError> {
    let validators = state
        .elected
        .current_elected()
        .await
        .map_err(|e| state.chain_failure(e))?;

    Ok(Json(ElectedValidatorsResponse {
        validators: validators.into_iter().map(Into::into).collect(),
    }))
}

/// GET /epoch-vg-registered/:address
pub async fn epoch_vg_registered(
    State(state): State<Arc<AppState>>,
    address: Result<Path<String>, PathRejection>,
) -> Result<Json<RegistrationResponse>, ApiError> {
    let Path(address) = address?;
    let registration = state
        .groups
        .registration_of(&address)
        .await
        .map_err(|e| state.chain_failure(e))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(registration.into()))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        git_sha: option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
    })
}

/// GET /metrics
pub async fn metrics(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let body = state
        .metrics
        .render()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body).into_response())
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
