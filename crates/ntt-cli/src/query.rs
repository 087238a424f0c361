//! # Query Subcommand
//!
//! Read-only questions against the state file. Every answer is a JSON value.

use clap::{Args, Subcommand};
use ntt_core::{parse_address, Address, TokenId};
use ntt_registry::Role;
use serde_json::{json, Value};

use crate::config::CliConfig;
use crate::state;

/// Arguments for the query subcommand.
#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub query: Query,
}

/// The available queries.
#[derive(Subcommand, Debug)]
pub enum Query {
    /// Number of credentials ever minted to a holder.
    BalanceOf {
        #[arg(value_parser = parse_address)]
        holder: Address,
    },
    /// Holder of a credential.
    OwnerOf { token_id: TokenId },
    /// Full credential record.
    Credential { token_id: TokenId },
    /// Whether a credential is unrevoked.
    IsValid { token_id: TokenId },
    /// Whether a holder has any unrevoked credential.
    HasValid {
        #[arg(value_parser = parse_address)]
        holder: Address,
    },
    /// Whether an identity holds a role.
    HasRole {
        role: Role,
        #[arg(value_parser = parse_address)]
        account: Address,
    },
    /// The role that administers a role.
    RoleAdmin { role: Role },
    /// Registry name, symbol and counters.
    Info,
    /// Event log, optionally from a sequence number onward.
    Events {
        #[arg(long, default_value_t = 0)]
        since: u64,
    },
}

/// Run the query subcommand.
pub fn run(args: &QueryArgs, config: &CliConfig) -> anyhow::Result<Value> {
    let registry = state::load(&config.state_file)?;
    let value = match &args.query {
        Query::BalanceOf { holder } => json!(registry.balance_of(holder)?),
        Query::OwnerOf { token_id } => json!(registry.owner_of(*token_id)?),
        Query::Credential { token_id } => serde_json::to_value(registry.get_credential(*token_id)?)?,
        Query::IsValid { token_id } => json!(registry.is_valid(*token_id)?),
        Query::HasValid { holder } => json!(registry.has_valid(holder)),
        Query::HasRole { role, account } => json!(registry.has_role(*role, account)),
        Query::RoleAdmin { role } => json!(registry.role_admin(*role)),
        Query::Info => json!({
            "name": registry.name(),
            "symbol": registry.symbol(),
            "emittedCount": registry.emitted_count(),
            "holdersCount": registry.holders_count(),
        }),
        Query::Events { since } => serde_json::to_value(registry.events_since(*since))?,
    };
    Ok(value)
}
