// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 (BEP-20) token contract interface and unit helpers.

use std::str::FromStr;

use alloy::{
    primitives::{Address, U256},
    sol,
};

use super::client::TokenClientError;

// Only the four functions the gateway calls are bound.
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function name() external view returns (string);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address recipient, uint256 amount) external returns (bool);
    }
}

/// Parse an account or recipient address.
///
/// All-lowercase and all-uppercase hex is accepted as is. Mixed case must
/// carry a valid EIP-55 checksum.
pub fn parse_address(raw: &str) -> Result<Address, TokenClientError> {
    let trimmed = raw.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());

    let parsed = if has_lower && has_upper {
        Address::parse_checksummed(trimmed, None).map_err(|e| e.to_string())
    } else {
        Address::from_str(trimmed).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| TokenClientError::InvalidAddress(format!("{raw}: {e}")))
}

/// Parse a raw token amount (smallest unit), decimal or `0x`-prefixed hex.
pub fn parse_amount(raw: &str) -> Result<U256, TokenClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TokenClientError::InvalidAmount("amount is empty".to_string()));
    }

    U256::from_str(trimmed).map_err(|e| TokenClientError::InvalidAmount(format!("{raw}: {e}")))
}

/// Format a raw amount with the given decimals.
///
/// Keeps full precision and always renders at least one fractional digit,
/// so `10^18` with 18 decimals becomes `"1.0"`.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / divisor;
    let remainder = amount % divisor;

    if remainder.is_zero() {
        return format!("{whole}.0");
    }

    let decimal_str = format!("{:0>width$}", remainder.to_string(), width = decimals as usize);
    format!("{}.{}", whole, decimal_str.trim_end_matches('0'))
}
