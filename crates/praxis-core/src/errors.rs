//! Error types for praxis-core.
//!
//! Library crates return these typed errors; the CLI converts them at its
//! boundary. Error kinds stay distinct so callers can branch on them.

use thiserror::Error;

pub type PraxisResult<T> = Result<T, PraxisError>;

#[derive(Debug, Error)]
pub enum PraxisError {
    /// A caller-supplied value failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A derived numeric value does not fit its on-chain width.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

impl PraxisError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }
}
