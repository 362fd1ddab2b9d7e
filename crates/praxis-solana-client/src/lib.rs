//! praxis-solana-client
//!
//! This crate provides a small, focused Rust client for interacting with the
//! Praxis on-chain course registry program.
//!
//! It includes:
//! - PDA derivation helpers
//! - byte-exact `create_course` instruction encoding
//! - an RPC client for existence probes and single-attempt submit-and-confirm
//! - the idempotent registration workflow
//!
//! Note: The on-chain program id is expected to be provided by the consumer.
//! The default here is a placeholder constant for local development.

pub mod client;
pub mod constants;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod workflow;

pub use client::*;
pub use constants::*;
pub use error::{Error, Result};
pub use instruction::*;
pub use pda::*;
pub use workflow::*;
