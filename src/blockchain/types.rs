// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and constants.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// EVM network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// Chainstack RPC endpoint prefix; the node access key is appended to it
    pub rpc_base_url: &'static str,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// BNB Smart Chain mainnet configuration.
pub const BSC_MAINNET: NetworkConfig = NetworkConfig {
    name: "BNB Smart Chain",
    chain_id: 56,
    rpc_base_url: "https://bsc-mainnet.core.chainstack.com/",
    explorer_url: "https://bscscan.com",
};

/// The token contract this gateway serves.
pub const TOKEN_CONTRACT: &str = "0x4691f60c894d3f16047824004420542e4674e621";

impl NetworkConfig {
    /// Node URL for the given access key.
    pub fn rpc_url(&self, node_key: &str) -> String {
        format!("{}{}", self.rpc_base_url, node_key)
    }

    /// Explorer link for a transaction hash.
    pub fn tx_link(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url, tx_hash)
    }
}

/// Token balance of one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenBalance {
    /// Balance in the token's smallest unit
    #[serde(rename = "rawBalance: ")]
    pub balance_raw: String,
    /// Balance adjusted by the token's decimals
    #[serde(rename = "formattedBalance: ")]
    pub balance_formatted: String,
}

/// Result of a broadcast transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SendResult {
    /// Transaction hash (0x + 64 hex chars)
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    /// Block explorer URL for the transaction
    pub link: String,
}
