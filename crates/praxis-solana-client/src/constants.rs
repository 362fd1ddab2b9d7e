//! Constants shared with the on-chain course registry program.
//!
//! Keep these stable because they affect PDA derivation and the instruction
//! wire format.

use solana_program::pubkey::Pubkey;

/// PDA seed for course accounts.
pub const SEED_COURSE: &[u8] = b"course";

/// PDA seed for the global config account.
pub const SEED_CONFIG: &[u8] = b"config";

/// Anchor discriminator for the `create_course` instruction.
///
/// Equal to `sha256("global:create_course")[..8]`; a unit test in
/// [`crate::instruction`] asserts the two stay in sync.
pub const CREATE_COURSE_DISCRIMINATOR: [u8; 8] = [120, 121, 154, 164, 107, 180, 167, 241];

/// Completions a course must record before the creator reward unlocks.
/// Fixed by the current program version.
pub const MIN_COMPLETIONS_FOR_REWARD: u16 = 10;

/// Default program id (placeholder).
///
/// Replace this with the deployed program id when available.
pub const DEFAULT_PROGRAM_ID: &str = "Praxis1111111111111111111111111111111111111";

pub fn default_program_id() -> Pubkey {
    DEFAULT_PROGRAM_ID.parse().unwrap_or_else(|_| Pubkey::default())
}
