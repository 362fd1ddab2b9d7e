//! Registration workflow tests against an in-memory ledger.
//!
//! The network edge is mocked out through the `CourseLedger` and
//! `CourseSubmitter` traits; these tests pin down the workflow's ordering
//! guarantees (no submission for existing courses, no network work for
//! invalid input) and its idempotence.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};

use praxis_core::course::CourseParams;
use praxis_solana_client::{
    default_program_id, derive_course_pda, register_course, CourseLedger, CourseSubmitter, Error,
    RegistrationOutcome, Result,
};

/// In-memory stand-in for the ledger: a confirmed submission inserts the
/// course PDA, so a later probe sees it.
#[derive(Default)]
struct MockChain {
    accounts: Mutex<HashSet<Pubkey>>,
    probes: AtomicUsize,
    submissions: AtomicUsize,
}

impl MockChain {
    fn with_account(address: Pubkey) -> Self {
        let chain = Self::default();
        chain.accounts.lock().unwrap().insert(address);
        chain
    }
}

#[async_trait]
impl CourseLedger for MockChain {
    async fn course_exists(&self, address: &Pubkey) -> Result<bool> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        Ok(self.accounts.lock().unwrap().contains(address))
    }
}

#[async_trait]
impl CourseSubmitter for MockChain {
    async fn submit_create_course(
        &self,
        instruction: Instruction,
        _authority: &Keypair,
    ) -> Result<Signature> {
        let n = self.submissions.fetch_add(1, Ordering::SeqCst);
        // First account meta is the course PDA.
        let course_pda = instruction.accounts[0].pubkey;
        self.accounts.lock().unwrap().insert(course_pda);
        Ok(Signature::from([n as u8 + 1; 64]))
    }
}

/// Submitter whose confirmation wait always expires.
#[derive(Default)]
struct TimeoutSubmitter {
    submissions: AtomicUsize,
}

#[async_trait]
impl CourseSubmitter for TimeoutSubmitter {
    async fn submit_create_course(
        &self,
        _instruction: Instruction,
        _authority: &Keypair,
    ) -> Result<Signature> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        Err(Error::ConfirmationTimeout {
            signature: Signature::from([9u8; 64]),
        })
    }
}

fn sample_params(course_id: &str) -> CourseParams {
    CourseParams {
        course_id: course_id.to_string(),
        lesson_count: 10,
        difficulty: 2,
        xp_per_lesson: 50,
        track_id: 3,
        track_level: 1,
    }
}

#[tokio::test]
async fn registers_once_then_reports_already_registered() {
    let chain = MockChain::default();
    let authority = Keypair::new();
    let program_id = default_program_id();
    let params = sample_params("intro-rust-101");

    let first = register_course(&chain, &chain, &program_id, &authority, &params)
        .await
        .unwrap();
    assert!(matches!(first, RegistrationOutcome::Submitted { .. }));
    assert_eq!(chain.submissions.load(Ordering::SeqCst), 1);

    let second = register_course(&chain, &chain, &program_id, &authority, &params)
        .await
        .unwrap();
    assert_eq!(second, RegistrationOutcome::AlreadyRegistered);
    assert_eq!(chain.submissions.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn existing_course_never_reaches_the_submitter() {
    let program_id = default_program_id();
    let params = sample_params("intro-rust-101");
    let (course_pda, _) = derive_course_pda(&program_id, &params.course_id).unwrap();

    let chain = MockChain::with_account(course_pda);
    let authority = Keypair::new();

    let outcome = register_course(&chain, &chain, &program_id, &authority, &params)
        .await
        .unwrap();
    assert_eq!(outcome, RegistrationOutcome::AlreadyRegistered);
    assert_eq!(chain.submissions.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn confirmation_timeout_is_surfaced_and_nothing_is_marked_registered() {
    let ledger = MockChain::default();
    let submitter = TimeoutSubmitter::default();
    let authority = Keypair::new();
    let program_id = default_program_id();
    let params = sample_params("intro-rust-101");

    let err = register_course(&ledger, &submitter, &program_id, &authority, &params)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ConfirmationTimeout { .. }));
    assert_eq!(submitter.submissions.load(Ordering::SeqCst), 1);
    assert!(ledger.accounts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_course_id_fails_before_any_network_call() {
    let chain = MockChain::default();
    let authority = Keypair::new();
    let program_id = default_program_id();
    let params = sample_params("");

    let err = register_course(&chain, &chain, &program_id, &authority, &params)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(chain.probes.load(Ordering::SeqCst), 0);
    assert_eq!(chain.submissions.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn distinct_courses_get_distinct_signatures() {
    let chain = MockChain::default();
    let authority = Keypair::new();
    let program_id = default_program_id();

    let a = register_course(&chain, &chain, &program_id, &authority, &sample_params("rust-101"))
        .await
        .unwrap();
    let b = register_course(&chain, &chain, &program_id, &authority, &sample_params("rust-201"))
        .await
        .unwrap();

    match (a, b) {
        (
            RegistrationOutcome::Submitted { signature: sig_a },
            RegistrationOutcome::Submitted { signature: sig_b },
        ) => assert_ne!(sig_a, sig_b),
        other => panic!("expected two submissions, got {other:?}"),
    }
}
