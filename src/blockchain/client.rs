// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! BNB Smart Chain client for the gateway's token contract.

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, Provider, ProviderBuilder, RootProvider,
    },
};
use async_trait::async_trait;

use super::erc20::{parse_address, parse_amount, IERC20};
use super::signing::SigningWallet;
use super::types::*;

/// HTTP provider type for read-only calls (with all fillers).
type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// Operations the HTTP layer needs from the token contract.
///
/// Handlers only see this trait, so the node can be swapped for an
/// in-process fake in tests.
#[async_trait]
pub trait TokenApi: Send + Sync {
    /// Token name as reported by the contract.
    async fn name(&self) -> Result<String, TokenClientError>;

    /// Token decimals as reported by the contract.
    async fn decimals(&self) -> Result<u8, TokenClientError>;

    /// Raw balance of `account` in the token's smallest unit.
    async fn balance_of(&self, account: &str) -> Result<U256, TokenClientError>;

    /// Sign and broadcast `transfer(recipient, amount)`.
    async fn transfer(&self, recipient: &str, amount: &str)
        -> Result<SendResult, TokenClientError>;

    /// Chain ID reported by the node.
    async fn chain_id(&self) -> Result<u64, TokenClientError>;

    /// Whether a signing key is configured (not validated).
    fn has_signer(&self) -> bool;

    /// Network this client is bound to.
    fn network(&self) -> &NetworkConfig;
}

/// Token contract client backed by a JSON-RPC node.
pub struct TokenClient {
    /// Network configuration
    network: NetworkConfig,
    /// Node endpoint
    rpc_url: url::Url,
    /// Token contract address
    contract_address: Address,
    /// Read-only contract instance over the shared provider
    contract: IERC20::IERC20Instance<HttpProvider>,
    /// Key used for transfers
    wallet: SigningWallet,
}

impl TokenClient {
    /// Create a client for `contract_address` behind `rpc_url`.
    ///
    /// No network traffic happens here; the node is first contacted by a call.
    pub fn new(
        network: NetworkConfig,
        rpc_url: &str,
        contract_address: &str,
        wallet: SigningWallet,
    ) -> Result<Self, TokenClientError> {
        let rpc_url: url::Url = rpc_url.parse().map_err(|e: url::ParseError| {
            TokenClientError::InvalidRpcUrl(e.to_string())
        })?;
        let contract_address = parse_address(contract_address)?;

        let provider = ProviderBuilder::new().connect_http(rpc_url.clone());
        let contract = IERC20::new(contract_address, provider);

        Ok(Self {
            network,
            rpc_url,
            contract_address,
            contract,
            wallet,
        })
    }

    /// Contract address this client is bound to.
    pub fn contract_address(&self) -> Address {
        self.contract_address
    }
}

#[async_trait]
impl TokenApi for TokenClient {
    async fn name(&self) -> Result<String, TokenClientError> {
        let result = self
            .contract
            .name()
            .call()
            .await
            .map_err(|e| TokenClientError::ContractError(e.to_string()))?;
        Ok(result.to_string())
    }

    async fn decimals(&self) -> Result<u8, TokenClientError> {
        self.contract
            .decimals()
            .call()
            .await
            .map_err(|e| TokenClientError::ContractError(e.to_string()))
    }

    async fn balance_of(&self, account: &str) -> Result<U256, TokenClientError> {
        let addr = parse_address(account)?;

        self.contract
            .balanceOf(addr)
            .call()
            .await
            .map_err(|e| TokenClientError::ContractError(e.to_string()))
    }

    async fn transfer(
        &self,
        recipient: &str,
        amount: &str,
    ) -> Result<SendResult, TokenClientError> {
        let to = parse_address(recipient)?;
        let amount = parse_amount(amount)?;
        let wallet = self.wallet.wallet()?;

        // Gas, nonce and chain id are filled by the provider.
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(self.rpc_url.clone());
        let contract = IERC20::new(self.contract_address, provider);

        let pending = contract
            .transfer(to, amount)
            .send()
            .await
            .map_err(|e| TokenClientError::TransactionFailed(e.to_string()))?;

        let tx_hash = format!("{:?}", pending.tx_hash());
        let link = self.network.tx_link(&tx_hash);

        tracing::info!(tx_hash = %tx_hash, recipient = %to, amount = %amount, "Transfer broadcast");

        Ok(SendResult { tx_hash, link })
    }

    async fn chain_id(&self) -> Result<u64, TokenClientError> {
        self.contract
            .provider()
            .get_chain_id()
            .await
            .map_err(|e| TokenClientError::RpcError(e.to_string()))
    }

    fn has_signer(&self) -> bool {
        self.wallet.is_configured()
    }

    fn network(&self) -> &NetworkConfig {
        &self.network
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, thiserror::Error)]
pub enum TokenClientError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Signing key is not configured")]
    MissingPrivateKey,

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Contract error: {0}")]
    ContractError(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}
