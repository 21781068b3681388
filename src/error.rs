// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{blockchain::TokenClientError, config::ErrorMode};

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

/// Body of every failed request.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    /// Apply the configured error mode. Legacy mode answers every error with 200.
    pub fn with_mode(mut self, mode: ErrorMode) -> Self {
        if mode == ErrorMode::Legacy {
            self.status = StatusCode::OK;
        }
        self
    }
}

impl From<TokenClientError> for ApiError {
    fn from(err: TokenClientError) -> Self {
        let message = err.to_string();
        match err {
            TokenClientError::InvalidAddress(_) | TokenClientError::InvalidAmount(_) => {
                Self::bad_request(message)
            }
            TokenClientError::MissingPrivateKey
            | TokenClientError::InvalidPrivateKey(_)
            | TokenClientError::InvalidRpcUrl(_) => Self::internal(message),
            TokenClientError::RpcError(_)
            | TokenClientError::ContractError(_)
            | TokenClientError::TransactionFailed(_) => Self::bad_gateway(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
