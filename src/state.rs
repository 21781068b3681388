// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::{
    blockchain::{TokenApi, TokenClientError},
    config::ErrorMode,
    error::ApiError,
};

/// Handles shared by every request. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub token: Arc<dyn TokenApi>,
    pub error_mode: ErrorMode,
}

impl AppState {
    pub fn new(token: Arc<dyn TokenApi>, error_mode: ErrorMode) -> Self {
        Self { token, error_mode }
    }

    /// Convert a failure into the response the configured error mode expects.
    pub fn fail(&self, err: impl Into<ApiError>) -> ApiError {
        err.into().with_mode(self.error_mode)
    }

    /// Same as [`AppState::fail`], logging the client error first.
    pub fn client_failure(&self, operation: &str, err: TokenClientError) -> ApiError {
        tracing::warn!(operation, error = %err, "Token call failed");
        self.fail(err)
    }
}
