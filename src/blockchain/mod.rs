// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain integration for the gateway's BEP-20 token.
//!
//! This module provides functionality for:
//! - Reading the token name, decimals and account balances
//! - Signing and broadcasting token transfers

pub mod client;
pub mod erc20;
pub mod signing;
pub mod types;

#[cfg(test)]
pub(crate) mod test_node;

pub use client::{TokenApi, TokenClient, TokenClientError};
pub use erc20::{format_units, parse_address, parse_amount};
pub use signing::SigningWallet;
pub use types::*;
