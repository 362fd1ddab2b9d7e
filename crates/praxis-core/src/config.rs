//! Chain configuration.
//!
//! Explicit, caller-provided configuration for RPC access. The core crate
//! does not read environment variables; higher layers (CLI, server) decide
//! where values come from.

use serde::{Deserialize, Serialize};

use crate::errors::{PraxisError, PraxisResult};

/// Read consistency level for ledger queries and confirmation.
///
/// The existence probe runs at this level. `Confirmed` trades a short
/// staleness window for latency; deployments that cannot tolerate it select
/// `Finalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }

    pub fn parse(s: &str) -> PraxisResult<Self> {
        match s {
            "processed" => Ok(Self::Processed),
            "confirmed" => Ok(Self::Confirmed),
            "finalized" => Ok(Self::Finalized),
            _ => Err(PraxisError::invalid_argument(format!(
                "unsupported commitment level: {s}"
            ))),
        }
    }
}

/// RPC endpoint configuration.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub rpc_url: String,
    pub commitment: Commitment,
    /// Deadline for a single read request (blockhash fetch, account probe).
    pub request_timeout_ms: u64,
    /// Deadline for the submit-and-confirm wait.
    pub confirm_timeout_ms: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            commitment: Commitment::Confirmed,
            request_timeout_ms: 30_000,
            confirm_timeout_ms: 90_000,
        }
    }
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &ChainConfig) -> PraxisResult<()> {
    if cfg.rpc_url.trim().is_empty() {
        return Err(PraxisError::invalid_argument("rpc_url must not be empty"));
    }
    if cfg.request_timeout_ms == 0 {
        return Err(PraxisError::invalid_argument(
            "request_timeout_ms must be greater than zero",
        ));
    }
    if cfg.confirm_timeout_ms == 0 {
        return Err(PraxisError::invalid_argument(
            "confirm_timeout_ms must be greater than zero",
        ));
    }
    Ok(())
}
