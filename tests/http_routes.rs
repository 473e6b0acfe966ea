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

use alloy::primitives::{address, Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::transports::mock::Asserter;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use stakewatch::api::{router, AppState};
use stakewatch::chain::{
    memory::InMemoryChainReader,
    rpc::{CoreContracts, RpcChainReader},
    ChainReader, GroupRegisteredEvent,
};
use stakewatch::core::types::ServiceConfig;
use stakewatch::monitoring::metrics::Metrics;

const GROUP: Address = address!("a432da0ed5a2c15cbc681227ccec3b375908fdcb");
const UNIT: u128 = 1_000_000_000_000_000_000_000_000;

fn chain() -> InMemoryChainReader {
    let mut reader = InMemoryChainReader::at_height(17_281).with_validator(
        Address::repeat_byte(1),
        Address::repeat_byte(0x11),
        "Validator One",
        GROUP,
    );
    reader
        .slashing_multipliers
        .insert(GROUP, U256::from(UNIT));
    reader.target_voting_yield = U256::from(160_000_000_000_000_000_000u128);
    reader.rewards_multiplier = U256::from(UNIT);
    reader.registrations.push(GroupRegisteredEvent {
        block_number: 17_280,
        group: GROUP,
    });
    reader
}

fn app(reader: InMemoryChainReader) -> Router {
    app_over(Arc::new(reader))
}

fn app_over(reader: Arc<dyn ChainReader>) -> Router {
    let state = AppState::new(
        reader,
        &ServiceConfig::default(),
        Metrics::new().unwrap(),
    )
    .unwrap();
    router(Arc::new(state))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, Method::GET, uri).await
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = res.status();
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    let json: Value = serde_json::from_slice(&body).expect("json body");
    (status, json)
}

fn offline() -> InMemoryChainReader {
    let mut reader = chain();
    reader.offline = true;
    reader
}

#[tokio::test]
async fn current_epoch() {
    let (status, body) = get_json(&app(chain()), "/current-epoch").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "epoch": 2 }));
}

#[tokio::test]
async fn downtime_score() {
    let app = app(chain());
    let (status, body) = get_json(&app, &format!("/downtime-score/{GROUP}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "multiplier": "1" }));

    let (status, body) = get_json(&app, "/downtime-score/0xnope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "INVALID_ARGUMENT" }));

    let (status, _) = get_json(
        &app,
        "/downtime-score/0x0000000000000000000000000000000000000001",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn target_apy() {
    let (status, body) = get_json(&app(chain()), "/target-apy").await;
    assert_eq!(status, StatusCode::OK);
    let apy = body["target_apy"].as_str().expect("string");
    assert!(apy.starts_with("6.0134014067"), "{apy}");
}

#[tokio::test]
async fn elected_validators() {
    let (status, body) = get_json(&app(chain()), "/elected-validators").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "validators": [{
                "name": "Validator One",
                "address": Address::repeat_byte(0x11).to_checksum(None),
                "group": GROUP.to_checksum(None),
            }]
        })
    );
}

#[tokio::test]
async fn epoch_vg_registered() {
    let app = app(chain());
    let (status, body) = get_json(
        &app,
        "/epoch-vg-registered/0xA432DA0ED5A2C15CBC681227CCEC3B375908FDCB",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "block": 17280, "epoch": 1 }));

    let (status, body) = get_json(
        &app,
        "/epoch-vg-registered/0x0000000000000000000000000000000000000001",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "NOT_FOUND" }));
}

#[tokio::test]
async fn transport_failures_are_500_json() {
    let app = app(offline());
    for uri in [
        "/current-epoch".to_string(),
        format!("/downtime-score/{GROUP}"),
        "/target-apy".to_string(),
        "/elected-validators".to_string(),
        format!("/epoch-vg-registered/{GROUP}"),
    ] {
        let (status, body) = get_json(&app, &uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, serde_json::json!({ "error": "INTERNAL_ERROR" }), "{uri}");
    }
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (status, body) = get_json(&app(chain()), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "NOT_FOUND" }));
}

#[tokio::test]
async fn health_reports_version() {
    let (status, body) = get_json(&app(chain()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn metrics_count_requests_and_failures() {
    let app = app(offline());
    let _ = get(&app, "/current-epoch").await;
    let _ = get(&app, "/current-epoch").await;

    let (status, body) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains(
        "stakewatch_http_requests_total{route=\"/current-epoch\",status=\"500\"} 2"
    ));
    assert!(text.contains("stakewatch_chain_errors_total{kind=\"transport\"} 2"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let res = app(chain())
        .oneshot(
            Request::builder()
                .uri("/current-epoch")
                .header("origin", "https://example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn wrong_method_is_json_405() {
    let app = app(chain());
    for uri in ["/current-epoch", "/target-apy", "/epoch-vg-registered/0x01"] {
        let (status, body) = send(&app, Method::POST, uri).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        let body: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(body, serde_json::json!({ "error": "METHOD_NOT_ALLOWED" }));
    }
}

#[tokio::test]
async fn undecodable_path_is_invalid_argument_json() {
    let app = app(chain());
    for uri in ["/downtime-score/%FF", "/epoch-vg-registered/%FF"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, serde_json::json!({ "error": "INVALID_ARGUMENT" }));
    }
}

fn rpc_app() -> (Asserter, Router) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .connect_mocked_client(asserter.clone())
        .erased();
    let contracts = CoreContracts {
        validators: Address::repeat_byte(0x01),
        epoch_rewards: Address::repeat_byte(0x02),
        election: Address::repeat_byte(0x03),
        accounts: Address::repeat_byte(0x04),
    };
    let reader = RpcChainReader::with_contracts(provider, contracts);
    (asserter, app_over(Arc::new(reader)))
}

#[tokio::test]
async fn node_errors_surface_as_500_not_404() {
    let (asserter, app) = rpc_app();
    asserter.push_failure_msg("header not found");
    asserter.push_failure_msg("header not found");
    let (status, body) = get_json(&app, "/target-apy").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "INTERNAL_ERROR" }));

    asserter.push_failure_msg("rate limit exceeded");
    let (status, _) = get_json(&app, &format!("/downtime-score/{GROUP}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn contract_revert_on_group_is_404() {
    let (asserter, app) = rpc_app();
    asserter.push_failure_msg("execution reverted");
    let (status, body) = get_json(&app, &format!("/downtime-score/{GROUP}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "INVALID_ARGUMENT" }));
}
