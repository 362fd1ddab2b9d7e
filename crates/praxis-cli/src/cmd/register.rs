use anyhow::{anyhow, Result};
use serde::Serialize;
use solana_sdk::signature::read_keypair_file;

use praxis_core::course::CourseParams;
use praxis_solana_client::{
    derive_course_pda, register_course, RegistrationOutcome, RegistryClient,
};

use crate::args::Cli;
use crate::cmd::{chain_config, resolve_program_id};
use crate::output;

#[derive(Debug, Serialize)]
pub struct RegisterOut {
    pub ok: bool,
    pub course_id: String,
    pub course_address: String,
    #[serde(flatten)]
    pub result: RegistrationOutcome,
}

#[allow(clippy::too_many_arguments)]
pub async fn run(
    cli: &Cli,
    id: &str,
    lessons: u8,
    difficulty: u8,
    xp_per_lesson: u32,
    track_id: u16,
    track_level: u8,
    keypair: &str,
) -> Result<()> {
    let config = chain_config(cli)?;
    let program_id = resolve_program_id(cli)?;
    let authority =
        read_keypair_file(keypair).map_err(|e| anyhow!("failed to read keypair {keypair}: {e}"))?;

    let params = CourseParams {
        course_id: id.to_string(),
        lesson_count: lessons,
        difficulty,
        xp_per_lesson,
        track_id,
        track_level,
    };

    let client = RegistryClient::new(program_id, &config)?;
    let result = register_course(&client, &client, &program_id, &authority, &params).await?;
    let (course_address, _bump) = derive_course_pda(&program_id, id)?;

    output::print(&RegisterOut {
        ok: true,
        course_id: id.to_string(),
        course_address: course_address.to_string(),
        result,
    })?;
    Ok(())
}
