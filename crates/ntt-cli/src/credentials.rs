//! # Credential Subcommands
//!
//! `mint` and `revoke`, each acting as `--caller`.

use clap::Args;
use ntt_core::{parse_address, Address, TokenId};

use crate::config::CliConfig;
use crate::state;

/// Arguments for the mint subcommand.
#[derive(Args, Debug)]
pub struct MintArgs {
    /// Team member issuing the credential.
    #[arg(long, value_parser = parse_address)]
    pub caller: Address,

    /// Identity the credential is bound to.
    #[arg(long, value_parser = parse_address)]
    pub holder: Address,

    /// Credential id, decimal or 0x-prefixed hex.
    #[arg(long)]
    pub token_id: TokenId,
}

/// Arguments for the revoke subcommand.
#[derive(Args, Debug)]
pub struct RevokeArgs {
    /// Team member revoking the credential.
    #[arg(long, value_parser = parse_address)]
    pub caller: Address,

    /// Credential id, decimal or 0x-prefixed hex.
    #[arg(long)]
    pub token_id: TokenId,
}

/// Run the mint subcommand.
pub fn mint(args: &MintArgs, config: &CliConfig) -> anyhow::Result<()> {
    state::update(&config.state_file, |registry| {
        registry.mint(&args.caller, &args.holder, args.token_id)
    })
}

/// Run the revoke subcommand.
pub fn revoke(args: &RevokeArgs, config: &CliConfig) -> anyhow::Result<()> {
    state::update(&config.state_file, |registry| {
        registry.revoke(&args.caller, args.token_id)
    })
}
