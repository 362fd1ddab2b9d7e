use anyhow::Result;
use serde::Serialize;

use praxis_solana_client::{derive_config_pda, derive_course_pda};

use crate::args::Cli;
use crate::cmd::resolve_program_id;
use crate::output;

#[derive(Debug, Serialize)]
pub struct DeriveOut {
    pub ok: bool,
    pub course_id: String,
    pub course_address: String,
    pub course_bump: u8,
    pub config_address: String,
    pub config_bump: u8,
}

/// Offline derivation; never touches the network.
pub fn run(cli: &Cli, id: &str) -> Result<()> {
    let program_id = resolve_program_id(cli)?;
    let (course_address, course_bump) = derive_course_pda(&program_id, id)?;
    let (config_address, config_bump) = derive_config_pda(&program_id);

    output::print(&DeriveOut {
        ok: true,
        course_id: id.to_string(),
        course_address: course_address.to_string(),
        course_bump,
        config_address: config_address.to_string(),
        config_bump,
    })?;
    Ok(())
}
