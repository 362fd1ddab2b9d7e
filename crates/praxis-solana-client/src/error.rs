//! Error taxonomy for the course registry client.
//!
//! Every failure path maps to a distinct kind so callers can tell
//! "definitely not registered, safe to retry" apart from "ambiguous,
//! reconcile before retrying". The client never retries mutating calls on
//! its own.

use solana_client::client_error::ClientError;
use solana_sdk::signature::Signature;
use thiserror::Error;

use praxis_core::PraxisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Parameter rejected before any derivation or network work.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A derived value does not fit its on-chain field width.
    #[error("overflow: {0}")]
    Overflow(String),

    /// Transport-level failure. Read-only calls may be retried safely.
    #[error("network error: {0}")]
    Network(String),

    /// The ledger or program declined the transaction. Includes the benign
    /// race where another writer initialized the course account first.
    #[error("submission rejected: {0}")]
    SubmissionRejected(String),

    /// Submitted but not confirmed within the deadline. The transaction may
    /// still land; re-query existence before deciding to retry.
    #[error("confirmation timed out for signature {signature}")]
    ConfirmationTimeout { signature: Signature },

    #[error(transparent)]
    Signer(#[from] solana_sdk::signer::SignerError),
}

impl From<PraxisError> for Error {
    fn from(e: PraxisError) -> Self {
        match e {
            PraxisError::InvalidArgument(msg) => Error::InvalidInput(msg),
            PraxisError::Overflow(msg) => Error::Overflow(msg),
        }
    }
}

impl From<ClientError> for Error {
    fn from(e: ClientError) -> Self {
        // A transaction error (preflight or on-chain) means the ledger saw
        // and declined the submission; anything else is transport.
        match e.get_transaction_error() {
            Some(tx_err) => Error::SubmissionRejected(tx_err.to_string()),
            None => Error::Network(e.to_string()),
        }
    }
}
