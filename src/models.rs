// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies of the token endpoints. Field names follow
//! the wire format of the original gateway, including the odd
//! `"rawBalance: "` keys on [`crate::blockchain::TokenBalance`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Token name response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct NameResponse {
    pub name: String,
}

/// Url-encoded transfer form.
///
/// Both fields are forwarded verbatim; a missing field is treated as empty
/// and rejected by the contract client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TransferRequest {
    /// Recipient address (0x + 40 hex chars)
    #[serde(default)]
    pub recipient: String,
    /// Amount in the token's smallest unit, decimal or 0x-hex
    #[serde(default)]
    pub amount: String,
}
