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

use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use thiserror::Error;

/// Metrics errors.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Metric construction or registration failed.
    #[error("prometheus")]
    Prom,
    /// Text exposition could not be encoded.
    #[error("encode")]
    Encode,
}

/// Metrics container.
#[derive(Clone)]
pub struct Metrics {
    /// Registry.
    pub registry: Registry,

    /// Served requests by matched route and status code.
    pub http_requests_total: IntCounterVec,
    /// Failed chain reads by error kind.
    pub chain_errors_total: IntCounterVec,
    /// Last observed chain height.
    pub chain_block_height: IntGauge,
}

impl Metrics {
    /// Create and register metrics.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("stakewatch_http_requests_total", "Served HTTP requests"),
            &["route", "status"],
        )
        .map_err(|_| MetricsError::Prom)?;
        let chain_errors_total = IntCounterVec::new(
            Opts::new("stakewatch_chain_errors_total", "Failed chain reads"),
            &["kind"],
        )
        .map_err(|_| MetricsError::Prom)?;
        let chain_block_height =
            IntGauge::new("stakewatch_chain_block_height", "Last observed chain height")
                .map_err(|_| MetricsError::Prom)?;

        registry
            .register(Box::new(http_requests_total.clone()))
            .map_err(|_| MetricsError::Prom)?;
        registry
            .register(Box::new(chain_errors_total.clone()))
            .map_err(|_| MetricsError::Prom)?;
        registry
            .register(Box::new(chain_block_height.clone()))
            .map_err(|_| MetricsError::Prom)?;

        Ok(Self {
            registry,
            http_requests_total,
            chain_errors_total,
            chain_block_height,
        })
    }

    /// Record a served request.
    pub fn observe_request(&self, route: &str, status: u16) {
        self.http_requests_total
            .with_label_values(&[route, &status.to_string()])
            .inc();
    }

    /// Record a failed chain read.
    pub fn observe_chain_error(&self, kind: &str) {
        self.chain_errors_total.with_label_values(&[kind]).inc();
    }

    /// Record the latest chain height seen.
    pub fn observe_height(&self, height: u64) {
        self.chain_block_height
            .set(i64::try_from(height).unwrap_or(i64::MAX));
    }

    /// Prometheus text exposition of every registered metric.
    pub fn render(&self) -> Result<String, MetricsError> {
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buf)
            .map_err(|_| MetricsError::Encode)?;
        String::from_utf8(buf).map_err(|_| MetricsError::Encode)
    }
}
