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

//! HTTP surface.
//!
//! Every route answers JSON, including failures: `{"error": "<CODE>"}` with 404 for
//! invalid or unknown entities, 405 for a wrong method and 500 for chain failures. `/metrics` is the one
//! plain-text exception.

use std::sync::Arc;

use axum::{
    extract::{MatchedPath, Request, State},
    handler::Handler,
    middleware::{self, Next},
    response::Response,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::chain::{ChainError, ChainReader};
use crate::core::economics::epoch::{EpochCalculator, EpochError};
use crate::core::lookup::{ElectedValidatorsLookup, TargetYieldLookup, ValidatorGroupLookup};
use crate::core::types::ServiceConfig;
use crate::monitoring::metrics::Metrics;

/// Failure classification.
pub mod error;
/// Route handlers.
pub mod handlers;
/// Response bodies.
pub mod models;

pub use error::ApiError;

/// Shared, read-only state behind every handler.
pub struct AppState {
    /// Chain access shared by all lookups.
    pub reader: Arc<dyn ChainReader>,
    /// Block to epoch mapping.
    pub epochs: EpochCalculator,
    /// Validator group facts.
    pub groups: ValidatorGroupLookup,
    /// Elected validator set.
    pub elected: ElectedValidatorsLookup,
    /// Network target yield.
    pub rewards: TargetYieldLookup,
    /// Service metrics.
    pub metrics: Metrics,
}

impl AppState {
    /// Wire lookups around `reader` according to `cfg`.
    pub fn new(
        reader: Arc<dyn ChainReader>,
        cfg: &ServiceConfig,
        metrics: Metrics,
    ) -> Result<Self, EpochError> {
        let epochs = EpochCalculator::new(cfg.epoch.blocks_per_epoch, cfg.epoch.rounding)?;
        Ok(Self {
            groups: ValidatorGroupLookup::new(reader.clone(), epochs, cfg.chain.log_chunk_size),
            elected: ElectedValidatorsLookup::new(reader.clone()),
            rewards: TargetYieldLookup::new(reader.clone()),
            reader,
            epochs,
            metrics,
        })
    }

    pub(crate) fn chain_failure(&self, err: ChainError) -> ApiError {
        self.metrics.observe_chain_error(err.kind());
        err.into()
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/current-epoch", only_get(handlers::current_epoch))
        .route("/downtime-score/:address", only_get(handlers::downtime_score))
        .route("/target-apy", only_get(handlers::target_apy))
        .route("/elected-validators", only_get(handlers::elected_validators))
        .route(
            "/epoch-vg-registered/:address",
            only_get(handlers::epoch_vg_registered),
        )
        .route("/health", only_get(handlers::health))
        .route("/metrics", only_get(handlers::metrics))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            track_requests,
        ))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// GET route whose other methods answer with a JSON 405.
fn only_get<H, T>(handler: H) -> MethodRouter<Arc<AppState>>
where
    H: Handler<T, Arc<AppState>>,
    T: 'static,
{
    get(handler).fallback(handlers::method_not_allowed)
}

async fn track_requests(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let res = next.run(req).await;
    state.metrics.observe_request(&route, res.status().as_u16());
    res
}
