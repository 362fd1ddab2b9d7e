use anyhow::{anyhow, Result};
use solana_sdk::pubkey::Pubkey;

use praxis_core::config::{ChainConfig, Commitment};
use praxis_solana_client::constants;

use crate::args::{Cli, Command};

mod derive;
mod doctor;
mod register;
mod status;

pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command.clone() {
        Command::Register {
            id,
            lessons,
            difficulty,
            xp_per_lesson,
            track_id,
            track_level,
            keypair,
        } => {
            register::run(
                &cli,
                &id,
                lessons,
                difficulty,
                xp_per_lesson,
                track_id,
                track_level,
                &keypair,
            )
            .await
        }
        Command::Status { id } => status::run(&cli, &id).await,
        Command::Derive { id } => derive::run(&cli, &id),
        Command::Doctor => doctor::run(&cli).await,
    }
}

pub fn chain_config(cli: &Cli) -> Result<ChainConfig> {
    Ok(ChainConfig {
        rpc_url: cli.url.clone(),
        commitment: Commitment::parse(&cli.commitment)?,
        request_timeout_ms: cli.timeout_secs.saturating_mul(1000),
        confirm_timeout_ms: cli.confirm_timeout_secs.saturating_mul(1000),
    })
}

pub fn resolve_program_id(cli: &Cli) -> Result<Pubkey> {
    match &cli.program_id {
        Some(s) => s.parse().map_err(|_| anyhow!("invalid program id: {s}")),
        None => Ok(constants::default_program_id()),
    }
}
