//! Instruction building for the course registry program.
//!
//! The wire format is fixed by the deployed program and reproduced here
//! byte-for-byte: an 8-byte Anchor discriminator followed by the
//! Borsh-compatible `create_course` parameter record. Any deviation is a
//! protocol bug, not a style choice.

use sha2::{Digest, Sha256};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_program::system_program;

use praxis_core::course::CourseParams;

use crate::constants::{CREATE_COURSE_DISCRIMINATOR, MIN_COMPLETIONS_FOR_REWARD};
use crate::error::Result;
use crate::pda::{derive_config_pda, derive_course_pda};

/// Fixed-width payload bytes following the variable-length course id:
/// creator (32), content tx id (32), lesson_count (1), difficulty (1),
/// xp_per_lesson (4), track_id (2), track_level (1), prerequisite tag (1),
/// creator_reward_xp (4), min_completions_for_reward (2).
const PARAMS_TAIL_LEN: usize = 32 + 32 + 1 + 1 + 4 + 2 + 1 + 1 + 4 + 2;

/// Anchor "global" instruction sighash.
pub fn anchor_sighash(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let digest = Sha256::digest(preimage.as_bytes());
    let mut sighash = [0u8; 8];
    sighash.copy_from_slice(&digest[..8]);
    sighash
}

/// Serialize `create_course` instruction data.
///
/// All integers little-endian; the course id is length-prefixed (u32). The
/// content tx id is a reserved, zero-filled placeholder and the prerequisite
/// Option is always encoded as None in this contract version.
pub fn encode_create_course(params: &CourseParams, creator: &Pubkey) -> Result<Vec<u8>> {
    let creator_reward_xp = params.creator_reward_xp()?;
    let id = params.course_id.as_bytes();

    let mut data = Vec::with_capacity(8 + 4 + id.len() + PARAMS_TAIL_LEN);
    data.extend_from_slice(&CREATE_COURSE_DISCRIMINATOR);
    data.extend_from_slice(&(id.len() as u32).to_le_bytes());
    data.extend_from_slice(id);
    data.extend_from_slice(creator.as_ref());
    data.extend_from_slice(&[0u8; 32]);
    data.push(params.lesson_count);
    data.push(params.difficulty);
    data.extend_from_slice(&params.xp_per_lesson.to_le_bytes());
    data.extend_from_slice(&params.track_id.to_le_bytes());
    data.push(params.track_level);
    // prerequisite: None
    data.push(0);
    data.extend_from_slice(&creator_reward_xp.to_le_bytes());
    data.extend_from_slice(&MIN_COMPLETIONS_FOR_REWARD.to_le_bytes());
    Ok(data)
}

/// Build the full `create_course` instruction.
///
/// Account order is fixed by the program: course PDA (writable), config PDA
/// (readonly), authority (writable signer, pays for the new account), system
/// program (readonly).
pub fn create_course_instruction(
    program_id: &Pubkey,
    authority: &Pubkey,
    params: &CourseParams,
) -> Result<Instruction> {
    let (course_pda, _bump) = derive_course_pda(program_id, &params.course_id)?;
    let (config_pda, _config_bump) = derive_config_pda(program_id);
    let data = encode_create_course(params, authority)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(course_pda, false),
            AccountMeta::new_readonly(config_pda, false),
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}
