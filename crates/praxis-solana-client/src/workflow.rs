//! Course registration workflow.
//!
//! Linear orchestration: validate, derive the course PDA, probe the ledger,
//! and submit only when the course is absent. The probe and the submission
//! sit behind traits so the workflow can be exercised without a network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use tracing::debug;

use praxis_core::course::CourseParams;

use crate::error::Result;
use crate::instruction::create_course_instruction;
use crate::pda::derive_course_pda;

/// Read-only existence probe against the ledger.
#[async_trait]
pub trait CourseLedger {
    async fn course_exists(&self, address: &Pubkey) -> Result<bool>;
}

/// Single-attempt transaction submission. Implementations must not retry
/// internally; an ambiguous outcome is surfaced as
/// [`crate::Error::ConfirmationTimeout`].
#[async_trait]
pub trait CourseSubmitter {
    async fn submit_create_course(
        &self,
        instruction: Instruction,
        authority: &Keypair,
    ) -> Result<Signature>;
}

/// Terminal outcome of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum RegistrationOutcome {
    /// Transaction confirmed; the course account now exists.
    Submitted { signature: String },
    /// The course PDA already exists; nothing was submitted.
    AlreadyRegistered,
}

/// Register a course on-chain, idempotently.
///
/// Parameter validation and PDA derivation happen before any network call;
/// their failures are fatal and carry no ambiguity. The existence probe and
/// the submission are not atomic against the ledger: a concurrent writer
/// racing past the probe surfaces as [`crate::Error::SubmissionRejected`]
/// from the program's own double-init guard, which callers should treat as
/// equivalent to [`RegistrationOutcome::AlreadyRegistered`].
pub async fn register_course<L, S>(
    ledger: &L,
    submitter: &S,
    program_id: &Pubkey,
    authority: &Keypair,
    params: &CourseParams,
) -> Result<RegistrationOutcome>
where
    L: CourseLedger + Sync,
    S: CourseSubmitter + Sync,
{
    params.validate()?;
    let (course_pda, _bump) = derive_course_pda(program_id, &params.course_id)?;

    if ledger.course_exists(&course_pda).await? {
        debug!(course_id = %params.course_id, %course_pda, "course already registered");
        return Ok(RegistrationOutcome::AlreadyRegistered);
    }

    let instruction = create_course_instruction(program_id, &authority.pubkey(), params)?;
    let signature = submitter.submit_create_course(instruction, authority).await?;
    debug!(course_id = %params.course_id, %signature, "course registered");

    Ok(RegistrationOutcome::Submitted {
        signature: signature.to_string(),
    })
}
