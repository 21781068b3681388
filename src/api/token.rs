// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token endpoints: name, balance and transfer.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    Form, Json,
};

use crate::{
    blockchain::{format_units, SendResult, TokenBalance},
    error::{ApiError, ErrorBody},
    models::{NameResponse, TransferRequest},
    state::AppState,
};

/// Read the token name from the contract.
#[utoipa::path(
    get,
    path = "/getName",
    tag = "Token",
    responses(
        (status = 200, description = "Token name, or an `error` field in legacy mode", body = NameResponse),
        (status = 502, description = "Node call failed (status mode)", body = ErrorBody)
    )
)]
pub async fn get_name(State(state): State<AppState>) -> Result<Json<NameResponse>, ApiError> {
    let name = state
        .token
        .name()
        .await
        .map_err(|e| state.client_failure("name", e))?;

    Ok(Json(NameResponse { name }))
}

/// Read the balance of an account, raw and adjusted by the token decimals.
///
/// Decimals are read from the contract on every request.
#[utoipa::path(
    get,
    path = "/getBalance/{id}",
    tag = "Token",
    params(("id" = String, Path, description = "Account address")),
    responses(
        (status = 200, description = "Balance, or an `error` field in legacy mode", body = TokenBalance),
        (status = 400, description = "Malformed address (status mode)", body = ErrorBody),
        (status = 502, description = "Node call failed (status mode)", body = ErrorBody)
    )
)]
pub async fn get_balance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TokenBalance>, ApiError> {
    let balance = state
        .token
        .balance_of(&id)
        .await
        .map_err(|e| state.client_failure("balanceOf", e))?;
    let decimals = state
        .token
        .decimals()
        .await
        .map_err(|e| state.client_failure("decimals", e))?;

    Ok(Json(TokenBalance {
        balance_raw: balance.to_string(),
        balance_formatted: format_units(balance, decimals),
    }))
}

/// Sign and broadcast a token transfer from the gateway wallet.
///
/// Returns as soon as the node accepts the transaction; it is not awaited
/// for inclusion.
#[utoipa::path(
    post,
    path = "/transfer",
    tag = "Token",
    request_body(content = TransferRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Broadcast transaction, or an `error` field in legacy mode", body = SendResult),
        (status = 400, description = "Malformed form, recipient or amount (status mode)", body = ErrorBody),
        (status = 500, description = "Signing key missing or invalid (status mode)", body = ErrorBody),
        (status = 502, description = "Node rejected the transaction (status mode)", body = ErrorBody)
    )
)]
pub async fn transfer(
    State(state): State<AppState>,
    form: Result<Form<TransferRequest>, FormRejection>,
) -> Result<Json<SendResult>, ApiError> {
    let Form(request) = form.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected transfer form");
        state.fail(ApiError::bad_request(rejection.body_text()))
    })?;

    let result = state
        .token
        .transfer(&request.recipient, &request.amount)
        .await
        .map_err(|e| state.client_failure("transfer", e))?;

    Ok(Json(result))
}
