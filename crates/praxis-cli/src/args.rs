use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "praxis", version, about = "Praxis course registry CLI")]
pub struct Cli {
    /// Emit compact JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// RPC endpoint URL.
    #[arg(long, global = true, default_value = "https://api.devnet.solana.com")]
    pub url: String,

    /// Course registry program id (defaults to the dev placeholder).
    #[arg(long, global = true)]
    pub program_id: Option<String>,

    /// Read consistency for ledger queries: processed|confirmed|finalized.
    #[arg(long, global = true, default_value = "confirmed")]
    pub commitment: String,

    /// Deadline in seconds for a single read request.
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Deadline in seconds for the submit-and-confirm wait.
    #[arg(long, global = true, default_value_t = 90)]
    pub confirm_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Register a course on-chain. Idempotent: re-running for an existing
    /// course is a no-op.
    Register {
        /// Course id, used verbatim as the PDA seed (max 32 bytes).
        id: String,

        #[arg(long)]
        lessons: u8,

        #[arg(long)]
        difficulty: u8,

        #[arg(long)]
        xp_per_lesson: u32,

        #[arg(long)]
        track_id: u16,

        #[arg(long, default_value_t = 0)]
        track_level: u8,

        /// Path to the authority keypair file (also pays fees).
        #[arg(long)]
        keypair: String,
    },

    /// Check whether a course account exists on-chain.
    Status { id: String },

    /// Derive course and config addresses offline.
    Derive { id: String },

    /// Run environment checks.
    Doctor,
}
