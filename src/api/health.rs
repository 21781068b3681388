// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response with individual component status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// Overall health status ("ok" or "degraded").
    pub status: String,
    /// Individual health checks and their results.
    pub checks: HealthChecks,
}

/// Individual health check results.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    /// Whether the service process is running.
    pub service: String,
    /// Node reachability: "ok", "wrong_chain" or "unavailable".
    pub node: String,
    /// Chain ID reported by the node, when it answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Signing key presence: "configured" or "missing". Not validated.
    pub signer: String,
}

/// Simple health check response for liveness checks.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness check handler.
///
/// Always returns 200 if the process is running.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness check handler.
///
/// Returns 200 only when the node answers with the configured chain ID.
/// A missing signing key is reported but does not fail readiness, since
/// read endpoints still work without it.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Service is not ready", body = ReadyResponse)
    )
)]
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let expected = state.token.network().chain_id;

    let (node, chain_id) = match state.token.chain_id().await {
        Ok(id) if id == expected => ("ok", Some(id)),
        Ok(id) => {
            tracing::warn!(expected, actual = id, "Node reports unexpected chain ID");
            ("wrong_chain", Some(id))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Node unavailable");
            ("unavailable", None)
        }
    };

    let signer = if state.token.has_signer() {
        "configured"
    } else {
        "missing"
    };

    let ready = node == "ok";
    let response = ReadyResponse {
        status: if ready { "ok" } else { "degraded" }.to_string(),
        checks: HealthChecks {
            service: "ok".to_string(),
            node: node.to_string(),
            chain_id,
            signer: signer.to_string(),
        },
    };

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
