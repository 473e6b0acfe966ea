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

//! Stakewatch - read-only HTTP facade over proof-of-stake contract state.
//!
//! This crate provides:
//! - Exact epoch and target-yield arithmetic over on-chain fixed-point values
//! - Validator group lookups (slashing multiplier, registration epoch)
//! - Elected validator set resolution with ordered concurrent fan-out
//! - An axum router with JSON error mapping, Prometheus metrics and tracing

/// HTTP routes, handlers and error mapping.
pub mod api;
/// Chain read seam and its JSON-RPC implementation.
pub mod chain;
/// Configuration loading and validation.
pub mod config;
/// Domain core (types, arithmetic, lookups).
pub mod core;
/// Observability (metrics, structured logging).
pub mod monitoring;
