//! PDA derivation for the course registry program.
//!
//! These helpers implement deterministic address derivation and must match
//! the on-chain program's seeds. Pure computation, no I/O.

use solana_program::pubkey::Pubkey;

use praxis_core::course::MAX_COURSE_ID_BYTES;

use crate::constants::{SEED_CONFIG, SEED_COURSE};
use crate::error::{Error, Result};

/// Derive the course PDA for a course id.
///
/// Course ids are used verbatim as seed bytes: the id must be non-empty and
/// fit the chain's 32-byte single-seed limit.
pub fn derive_course_pda(program_id: &Pubkey, course_id: &str) -> Result<(Pubkey, u8)> {
    if course_id.is_empty() {
        return Err(Error::InvalidInput("course id must not be empty".to_string()));
    }
    if course_id.len() > MAX_COURSE_ID_BYTES {
        return Err(Error::InvalidInput(format!(
            "course id exceeds {MAX_COURSE_ID_BYTES} seed bytes: got {}",
            course_id.len()
        )));
    }
    Ok(Pubkey::find_program_address(
        &[SEED_COURSE, course_id.as_bytes()],
        program_id,
    ))
}

/// Derive the global config PDA.
pub fn derive_config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_CONFIG], program_id)
}
