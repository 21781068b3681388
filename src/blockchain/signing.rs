// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signing wallet for token transfers.
//!
//! The gateway holds exactly one private key, read from the environment at
//! startup. The key is kept as configured and only parsed when a transfer
//! needs a signer, so a missing or malformed key surfaces as a transfer error
//! rather than a startup failure.

use std::fmt;

use alloy::{network::EthereumWallet, signers::local::PrivateKeySigner};
use k256::{pkcs8::DecodePrivateKey, SecretKey};

use super::client::TokenClientError;

const PEM_PREFIX: &str = "-----BEGIN";
const SEC1_PEM_TAG: &str = "EC PRIVATE KEY";
const PKCS8_PEM_TAG: &str = "PRIVATE KEY";

/// Holder of the configured signing key.
///
/// Accepts 32 hex-encoded bytes (optionally `0x`-prefixed) or a secp256k1
/// key in PEM form, either SEC1 (`EC PRIVATE KEY`) or PKCS#8 (`PRIVATE KEY`).
#[derive(Clone, Default)]
pub struct SigningWallet {
    key: Option<String>,
}

impl SigningWallet {
    /// Wrap a key as read from configuration. Blank values count as absent.
    pub fn new(key: Option<String>) -> Self {
        Self {
            key: key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Whether any key material was configured. Does not validate it.
    pub fn is_configured(&self) -> bool {
        self.key.is_some()
    }

    /// Parse the configured key into a signer.
    pub fn signer(&self) -> Result<PrivateKeySigner, TokenClientError> {
        let raw = self
            .key
            .as_deref()
            .ok_or(TokenClientError::MissingPrivateKey)?
            .trim();

        let key_bytes = if raw.starts_with(PEM_PREFIX) {
            Self::pem_key_bytes(raw)?
        } else {
            alloy::hex::decode(raw).map_err(invalid_key)?
        };

        PrivateKeySigner::from_slice(&key_bytes).map_err(invalid_key)
    }

    /// Parse the configured key into a wallet usable by a provider.
    pub fn wallet(&self) -> Result<EthereumWallet, TokenClientError> {
        Ok(EthereumWallet::from(self.signer()?))
    }

    fn pem_key_bytes(raw: &str) -> Result<Vec<u8>, TokenClientError> {
        let block = pem::parse(raw).map_err(|e| invalid_key(format!("PEM: {e}")))?;

        let secret = match block.tag() {
            SEC1_PEM_TAG => SecretKey::from_sec1_der(block.contents()).map_err(invalid_key)?,
            PKCS8_PEM_TAG => SecretKey::from_pkcs8_der(block.contents()).map_err(invalid_key)?,
            other => return Err(invalid_key(format!("unsupported PEM block `{other}`"))),
        };

        Ok(secret.to_bytes().to_vec())
    }
}

fn invalid_key(err: impl fmt::Display) -> TokenClientError {
    TokenClientError::InvalidPrivateKey(err.to_string())
}

impl fmt::Debug for SigningWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningWallet")
            .field("configured", &self.is_configured())
            .finish()
    }
}
