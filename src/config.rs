// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! [`Config`] loaded from them at startup. A `.env` file in the working
//! directory is read first, if present.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `pkey` | Private key used to sign transfers (hex or PEM) | Unset, transfers fail |
//! | `chainStackBSCNodeKey` | Chainstack access key appended to the BSC node URL | Empty |
//! | `RPC_URL` | Full node URL, overrides the Chainstack URL | Unset |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8000` |
//! | `ERROR_MODE` | `legacy` (errors with HTTP 200) or `status` | `legacy` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{env, fmt, net::SocketAddr, str::FromStr};

use crate::blockchain::{NetworkConfig, BSC_MAINNET};

/// Environment variable holding the signing key.
pub const SIGNER_KEY_ENV: &str = "pkey";

/// Environment variable holding the Chainstack node access key.
pub const NODE_KEY_ENV: &str = "chainStackBSCNodeKey";

/// Environment variable overriding the whole node URL.
pub const RPC_URL_ENV: &str = "RPC_URL";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const ERROR_MODE_ENV: &str = "ERROR_MODE";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {PORT_ENV} value `{0}`")]
    InvalidPort(String),

    #[error("Unknown error mode `{0}` (expected `legacy` or `status`)")]
    InvalidErrorMode(String),

    #[error("Invalid bind address `{0}`")]
    InvalidBindAddress(String),
}

/// How handler failures are reported over HTTP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Every failure is answered with HTTP 200 and an `error` field.
    #[default]
    Legacy,
    /// Failures carry a 4xx/5xx status; the body shape is unchanged.
    Status,
}

impl FromStr for ErrorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "status" => Ok(Self::Status),
            other => Err(ConfigError::InvalidErrorMode(other.to_string())),
        }
    }
}

impl fmt::Display for ErrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Status => f.write_str("status"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()) {
            Some(v) if v == "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Process configuration.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rpc_url: String,
    pub signer_key: Option<String>,
    pub error_mode: ErrorMode,
    pub log_format: LogFormat,
    pub network: NetworkConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("network", &self.network.name)
            .field("signer_key", &self.signer_key.as_ref().map(|_| "<redacted>"))
            .field("error_mode", &self.error_mode)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = BSC_MAINNET;

        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let rpc_url = match lookup(RPC_URL_ENV).filter(|v| !v.trim().is_empty()) {
            Some(url) => url.trim().to_string(),
            None => network.rpc_url(lookup(NODE_KEY_ENV).unwrap_or_default().trim()),
        };

        let error_mode = match lookup(ERROR_MODE_ENV) {
            Some(raw) => raw.parse()?,
            None => ErrorMode::default(),
        };

        Ok(Self {
            host,
            port,
            rpc_url,
            signer_key: lookup(SIGNER_KEY_ENV),
            error_mode,
            log_format: LogFormat::parse(lookup(LOG_FORMAT_ENV).as_deref()),
            network,
        })
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed socket address for the listener.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = self.bind_addr();
        addr.parse()
            .map_err(|_| ConfigError::InvalidBindAddress(addr))
    }
}
