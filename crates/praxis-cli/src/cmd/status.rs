use anyhow::Result;
use serde::Serialize;

use praxis_solana_client::{derive_course_pda, RegistryClient};

use crate::args::Cli;
use crate::cmd::{chain_config, resolve_program_id};
use crate::output;

#[derive(Debug, Serialize)]
pub struct StatusOut {
    pub ok: bool,
    pub course_id: String,
    pub course_address: String,
    pub exists: bool,
}

pub async fn run(cli: &Cli, id: &str) -> Result<()> {
    let config = chain_config(cli)?;
    let program_id = resolve_program_id(cli)?;

    let client = RegistryClient::new(program_id, &config)?;
    let (course_address, _bump) = derive_course_pda(&program_id, id)?;
    let exists = client.course_exists(&course_address).await?;

    output::print(&StatusOut {
        ok: true,
        course_id: id.to_string(),
        course_address: course_address.to_string(),
        exists,
    })?;
    Ok(())
}
