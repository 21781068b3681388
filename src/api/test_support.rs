// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-process stand-in for the token contract used by handler tests.

use std::{
    collections::HashMap,
    str::FromStr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use alloy::primitives::{keccak256, U256};
use async_trait::async_trait;

use crate::blockchain::{
    parse_address, parse_amount, NetworkConfig, SendResult, TokenApi, TokenClientError,
    BSC_MAINNET,
};

type SentTransfers = Arc<Mutex<Vec<(String, String)>>>;

pub struct MockToken {
    network: NetworkConfig,
    decimals: u8,
    chain_id: u64,
    balances: HashMap<String, U256>,
    failing: bool,
    has_signer: bool,
    decimals_reads: Arc<AtomicUsize>,
    sent: SentTransfers,
}

impl MockToken {
    pub fn new() -> Self {
        Self {
            network: BSC_MAINNET,
            decimals: 18,
            chain_id: BSC_MAINNET.chain_id,
            balances: HashMap::new(),
            failing: false,
            has_signer: true,
            decimals_reads: Arc::new(AtomicUsize::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_balance(mut self, account: &str, raw: &str) -> Self {
        self.balances
            .insert(account.to_lowercase(), U256::from_str(raw).unwrap());
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn without_signer(mut self) -> Self {
        self.has_signer = false;
        self
    }

    /// Every call fails as if the node were down.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn decimals_reads(&self) -> Arc<AtomicUsize> {
        self.decimals_reads.clone()
    }

    pub fn sent(&self) -> SentTransfers {
        self.sent.clone()
    }

    fn check_node(&self) -> Result<(), TokenClientError> {
        if self.failing {
            Err(TokenClientError::RpcError("node unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TokenApi for MockToken {
    async fn name(&self) -> Result<String, TokenClientError> {
        self.check_node()?;
        Ok("Mock Token".to_string())
    }

    async fn decimals(&self) -> Result<u8, TokenClientError> {
        self.check_node()?;
        self.decimals_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.decimals)
    }

    async fn balance_of(&self, account: &str) -> Result<U256, TokenClientError> {
        parse_address(account)?;
        self.check_node()?;
        // Yield so concurrent requests interleave.
        tokio::task::yield_now().await;
        Ok(self
            .balances
            .get(&account.to_lowercase())
            .copied()
            .unwrap_or(U256::ZERO))
    }

    async fn transfer(
        &self,
        recipient: &str,
        amount: &str,
    ) -> Result<SendResult, TokenClientError> {
        parse_address(recipient)?;
        parse_amount(amount)?;
        if !self.has_signer {
            return Err(TokenClientError::MissingPrivateKey);
        }
        self.check_node()?;

        let mut sent = self.sent.lock().unwrap();
        sent.push((recipient.to_string(), amount.to_string()));
        let tx_hash = format!(
            "{:?}",
            keccak256(format!("{recipient}:{amount}:{}", sent.len()))
        );

        Ok(SendResult {
            link: self.network.tx_link(&tx_hash),
            tx_hash,
        })
    }

    async fn chain_id(&self) -> Result<u64, TokenClientError> {
        self.check_node()?;
        Ok(self.chain_id)
    }

    fn has_signer(&self) -> bool {
        self.has_signer
    }

    fn network(&self) -> &NetworkConfig {
        &self.network
    }
}
