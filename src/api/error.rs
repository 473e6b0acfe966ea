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

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::api::models::ErrorBody;
use crate::chain::ChainError;

/// Request failure, classified for the HTTP boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Input rejected by a chain read; indistinguishable from a missing entity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Lookup legitimately found nothing.
    #[error("not found")]
    NotFound,
    /// Route exists but not for this method.
    #[error("method not allowed")]
    MethodNotAllowed,
    /// Chain node unreachable or failing.
    #[error("chain read failed: {0}")]
    Transport(String),
    /// Local failure unrelated to the chain.
    #[error("internal: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status code for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) | ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Transport(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code placed in the `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ApiError::Transport(_) | ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ChainError> for ApiError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::InvalidArgument(m) => ApiError::InvalidArgument(m),
            ChainError::Transport(m) => ApiError::Transport(m),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, "request rejected");
        }
        // Details stay in the logs; clients only see the code.
        (status, Json(ErrorBody { error: self.code() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_chain_errors() {
        let invalid = ApiError::from(ChainError::InvalidArgument("bad".into()));
        assert_eq!(invalid.status(), StatusCode::NOT_FOUND);
        assert_eq!(invalid.code(), "INVALID_ARGUMENT");

        let transport = ApiError::from(ChainError::Transport("down".into()));
        assert_eq!(transport.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(transport.code(), "INTERNAL_ERROR");

        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
