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

//! Structured logging bootstrap.

#![forbid(unsafe_code)]

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::core::types::LogConfig;

/// Install the global subscriber. `RUST_LOG` takes precedence over `cfg.filter`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(cfg: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = if cfg.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    if let Err(e) = installed {
        debug!(error = %e, "global subscriber already installed; keeping it");
    }
}
