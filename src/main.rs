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

//! Stakewatch service entrypoint (systemd-friendly).
//! Loads config, connects to the chain node and serves HTTP until signalled.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use stakewatch::{
    api::{self, AppState},
    chain::rpc::RpcChainReader,
    config,
    monitoring::{logging, metrics::Metrics},
};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(?e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                warn!(?e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_from_env().context("load config")?;
    logging::init(&cfg.log);

    info!(
        listen = %cfg.http.listen_addr,
        rpc = %cfg.chain.rpc_url,
        blocks_per_epoch = cfg.epoch.blocks_per_epoch,
        rounding = ?cfg.epoch.rounding,
        "stakewatch starting"
    );

    let metrics = Metrics::new().context("metrics init")?;
    let reader = RpcChainReader::connect(&cfg.chain)
        .await
        .context("connect to chain node")?;
    let state = AppState::new(Arc::new(reader), &cfg, metrics).context("build app state")?;
    let app = api::router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&cfg.http.listen_addr)
        .await
        .with_context(|| format!("bind {}", cfg.http.listen_addr))?;
    info!(addr = %cfg.http.listen_addr, "http listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;

    info!("stakewatch stopped");
    Ok(())
}
