//! RPC-backed registry client.
//!
//! Wraps the nonblocking RPC client with the two operations the workflow
//! needs: an existence probe and a single-attempt submit-and-confirm. Both
//! are bounded by caller-configured deadlines. The client holds no signing
//! material; the keypair is injected per submission and dropped with the
//! call.

use std::time::Duration;

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use tracing::debug;

use praxis_core::config::{validate_config, ChainConfig, Commitment};

use crate::error::{Error, Result};
use crate::workflow::{CourseLedger, CourseSubmitter};

pub struct RegistryClient {
    pub program_id: Pubkey,
    rpc: RpcClient,
    request_timeout: Duration,
    confirm_timeout: Duration,
}

impl std::fmt::Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("program_id", &self.program_id)
            .field("request_timeout", &self.request_timeout)
            .field("confirm_timeout", &self.confirm_timeout)
            .finish_non_exhaustive()
    }
}

fn commitment_config(level: Commitment) -> CommitmentConfig {
    let commitment = match level {
        Commitment::Processed => CommitmentLevel::Processed,
        Commitment::Confirmed => CommitmentLevel::Confirmed,
        Commitment::Finalized => CommitmentLevel::Finalized,
    };
    CommitmentConfig { commitment }
}

impl RegistryClient {
    pub fn new(program_id: Pubkey, config: &ChainConfig) -> Result<Self> {
        validate_config(config)?;
        let rpc = RpcClient::new_with_commitment(
            config.rpc_url.clone(),
            commitment_config(config.commitment),
        );
        Ok(Self {
            program_id,
            rpc,
            request_timeout: Duration::from_millis(config.request_timeout_ms),
            confirm_timeout: Duration::from_millis(config.confirm_timeout_ms),
        })
    }

    /// Whether an account exists at `address`, at the configured commitment.
    ///
    /// Read-only and idempotent; no internal retry. A concurrent writer can
    /// still land between this probe and a subsequent submission.
    pub async fn course_exists(&self, address: &Pubkey) -> Result<bool> {
        let response = tokio::time::timeout(
            self.request_timeout,
            self.rpc.get_account_with_commitment(address, self.rpc.commitment()),
        )
        .await
        .map_err(|_| {
            Error::Network(format!(
                "existence query timed out after {:?}",
                self.request_timeout
            ))
        })??;

        let exists = response.value.is_some();
        debug!(%address, exists, "course account probe");
        Ok(exists)
    }

    /// Sign and submit one transaction, blocking until confirmation or the
    /// confirm deadline. At most one attempt per call: on deadline expiry
    /// the signature is returned inside [`Error::ConfirmationTimeout`] for
    /// caller-side reconciliation, never resubmitted here.
    pub async fn submit_create_course(
        &self,
        instruction: Instruction,
        authority: &Keypair,
    ) -> Result<Signature> {
        let blockhash = tokio::time::timeout(
            self.request_timeout,
            self.rpc.get_latest_blockhash(),
        )
        .await
        .map_err(|_| {
            Error::Network(format!(
                "blockhash fetch timed out after {:?}",
                self.request_timeout
            ))
        })??;

        let message =
            Message::new_with_blockhash(&[instruction], Some(&authority.pubkey()), &blockhash);
        let mut tx = Transaction::new_unsigned(message);
        tx.try_sign(&[authority], blockhash)?;
        let signature = tx.signatures[0];

        debug!(%signature, "submitting transaction");
        match tokio::time::timeout(
            self.confirm_timeout,
            self.rpc.send_and_confirm_transaction(&tx),
        )
        .await
        {
            Ok(result) => {
                let signature = result?;
                debug!(%signature, "transaction confirmed");
                Ok(signature)
            }
            Err(_) => Err(Error::ConfirmationTimeout { signature }),
        }
    }
}

#[async_trait]
impl CourseLedger for RegistryClient {
    async fn course_exists(&self, address: &Pubkey) -> Result<bool> {
        RegistryClient::course_exists(self, address).await
    }
}

#[async_trait]
impl CourseSubmitter for RegistryClient {
    async fn submit_create_course(
        &self,
        instruction: Instruction,
        authority: &Keypair,
    ) -> Result<Signature> {
        RegistryClient::submit_create_course(self, instruction, authority).await
    }
}
