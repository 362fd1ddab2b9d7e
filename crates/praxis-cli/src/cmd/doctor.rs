use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use solana_client::nonblocking::rpc_client::RpcClient;

use crate::args::Cli;
use crate::cmd::chain_config;
use crate::output;

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub ok: bool,
    pub checks: Vec<Check>,
}

pub async fn run(cli: &Cli) -> Result<()> {
    let config = chain_config(cli)?;
    let mut checks = Vec::new();

    // Solana tooling is optional but useful for keypair management.
    checks.push(Check {
        name: "solana".to_string(),
        ok: which_ok("solana"),
        detail: "optional (keypair management, airdrops)".to_string(),
    });

    let rpc = RpcClient::new(config.rpc_url.clone());
    let rpc_ok = tokio::time::timeout(
        Duration::from_millis(config.request_timeout_ms),
        rpc.get_latest_blockhash(),
    )
    .await
    .map(|r| r.is_ok())
    .unwrap_or(false);
    checks.push(Check {
        name: "rpc".to_string(),
        ok: rpc_ok,
        detail: config.rpc_url.clone(),
    });

    let ok = checks.iter().all(|c| c.ok || c.name == "solana");
    output::print(&DoctorOut { ok, checks })?;
    Ok(())
}

fn which_ok(cmd: &str) -> bool {
    std::env::var_os("PATH")
        .and_then(|paths| {
            for p in std::env::split_paths(&paths) {
                let full = p.join(cmd);
                if full.exists() {
                    return Some(());
                }
                #[cfg(windows)]
                {
                    let full_exe = p.join(format!("{cmd}.exe"));
                    if full_exe.exists() {
                        return Some(());
                    }
                }
            }
            None
        })
        .is_some()
}
