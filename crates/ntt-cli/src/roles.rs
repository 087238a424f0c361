//! # Role Subcommands
//!
//! `grant-role`, `revoke-role` and `renounce-role`, each acting as `--caller`.

use clap::Args;
use ntt_core::{parse_address, Address};
use ntt_registry::Role;

use crate::config::CliConfig;
use crate::state;

/// Arguments shared by the role subcommands.
#[derive(Args, Debug)]
pub struct RoleArgs {
    /// Identity performing the call.
    #[arg(long, value_parser = parse_address)]
    pub caller: Address,

    /// Role to change (admin, manager, team or the canonical *_ROLE name).
    #[arg(long)]
    pub role: Role,

    /// Identity whose membership changes.
    #[arg(long, value_parser = parse_address)]
    pub account: Address,
}

/// Which membership change to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChange {
    /// `grant-role`: caller must hold the role's admin role.
    Grant,
    /// `revoke-role`: caller must hold the role's admin role.
    Revoke,
    /// `renounce-role`: caller gives up its own role.
    Renounce,
}

/// Run one of the role subcommands.
pub fn run(change: RoleChange, args: &RoleArgs, config: &CliConfig) -> anyhow::Result<()> {
    state::update(&config.state_file, |registry| match change {
        RoleChange::Grant => registry.grant_role(&args.caller, args.role, &args.account),
        RoleChange::Revoke => registry.revoke_role(&args.caller, args.role, &args.account),
        RoleChange::Renounce => registry.renounce_role(&args.caller, args.role, &args.account),
    })
}
