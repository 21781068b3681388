// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token Gateway - HTTP facade over a BEP-20 token
//!
//! Reads the token name and account balances from a fixed contract on BNB
//! Smart Chain and submits transfers signed by a single configured key.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `blockchain` - Contract binding, node client and signing wallet
//! - `config` - Environment configuration
//! - `telemetry` - Tracing setup

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod telemetry;
