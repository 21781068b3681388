// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    blockchain::{SendResult, TokenBalance},
    error::ErrorBody,
    models::{NameResponse, TransferRequest},
    state::AppState,
};

pub mod health;
pub mod token;

#[cfg(test)]
pub(crate) mod test_support;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/getName", get(token::get_name))
        .route("/getBalance/{id}", get(token::get_balance))
        .route("/transfer", post(token::transfer))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER)),
        )
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        token::get_name,
        token::get_balance,
        token::transfer,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            NameResponse,
            TokenBalance,
            TransferRequest,
            SendResult,
            ErrorBody,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    tags(
        (name = "Token", description = "BEP-20 token reads and transfers"),
        (name = "Health", description = "Liveness and readiness checks")
    )
)]
struct ApiDoc;
