// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Scripted JSON-RPC node for exercising [`super::TokenClient`] end to end.
//!
//! Answers the handful of methods the client and its fillers use. `eth_call`
//! is dispatched on the function selector, and `eth_sendRawTransaction`
//! returns the keccak hash of the raw bytes it received, as a real node does.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use alloy::{
    hex,
    primitives::{keccak256, Address, U256},
    sol_types::SolCall,
};
use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};

use super::erc20::IERC20;

#[derive(Clone, Default)]
pub struct ScriptedNode {
    pub chain_id: u64,
    pub name: String,
    pub decimals: u8,
    pub balances: HashMap<Address, U256>,
    pub raw_transactions: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedNode {
    pub fn new(chain_id: u64, name: &str, decimals: u8) -> Self {
        Self {
            chain_id,
            name: name.to_string(),
            decimals,
            ..Default::default()
        }
    }

    pub fn with_balance(mut self, account: Address, raw: U256) -> Self {
        self.balances.insert(account, raw);
        self
    }

    /// Serve on an ephemeral local port and return the node URL.
    pub async fn spawn(self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/", post(handle)).with_state(self);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    fn answer(&self, method: &str, params: &Value) -> Option<Value> {
        let one_gwei = "0x3b9aca00";
        match method {
            "eth_chainId" => Some(json!(format!("0x{:x}", self.chain_id))),
            "eth_call" => self.answer_call(params),
            "eth_estimateGas" => Some(json!("0xfde8")),
            "eth_gasPrice" | "eth_maxPriorityFeePerGas" => Some(json!(one_gwei)),
            "eth_feeHistory" => Some(json!({
                "oldestBlock": "0x1",
                "baseFeePerGas": [one_gwei, one_gwei],
                "gasUsedRatio": [0.5],
                "baseFeePerBlobGas": [],
                "blobGasUsedRatio": [],
                "reward": [[one_gwei]]
            })),
            "eth_blockNumber" => Some(json!("0x1")),
            "eth_getTransactionCount" => Some(json!("0x0")),
            "eth_sendRawTransaction" => {
                let raw = params[0].as_str()?.to_string();
                let bytes = hex::decode(&raw).ok()?;
                self.raw_transactions.lock().unwrap().push(raw);
                Some(json!(keccak256(bytes)))
            }
            _ => None,
        }
    }

    fn answer_call(&self, params: &Value) -> Option<Value> {
        let tx = &params[0];
        let input = tx["input"].as_str().or_else(|| tx["data"].as_str())?;
        let data = hex::decode(input).ok()?;
        let (selector, args) = data.split_at(4);

        let encoded = if selector == IERC20::nameCall::SELECTOR {
            encode_string(&self.name)
        } else if selector == IERC20::decimalsCall::SELECTOR {
            encode_uint(U256::from(self.decimals))
        } else if selector == IERC20::balanceOfCall::SELECTOR {
            let account = Address::from_slice(&args[12..32]);
            encode_uint(self.balances.get(&account).copied().unwrap_or(U256::ZERO))
        } else {
            return None;
        };

        Some(json!(format!("0x{}", hex::encode(encoded))))
    }
}

async fn handle(State(node): State<ScriptedNode>, Json(request): Json<Value>) -> Json<Value> {
    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default().to_string();
    node.calls.lock().unwrap().push(method.clone());

    let response = match node.answer(&method, &request["params"]) {
        Some(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        None => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32601, "message": format!("unsupported: {method}") }
        }),
    };

    Json(response)
}

fn encode_uint(value: U256) -> Vec<u8> {
    value.to_be_bytes::<32>().to_vec()
}

// Single dynamic return value: offset, length, right-padded bytes.
fn encode_string(value: &str) -> Vec<u8> {
    let mut out = encode_uint(U256::from(32u64));
    out.extend(encode_uint(U256::from(value.len())));
    let mut bytes = value.as_bytes().to_vec();
    bytes.resize(value.len().div_ceil(32) * 32, 0);
    out.extend(bytes);
    out
}
