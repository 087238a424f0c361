//! # ntt CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;
use ntt_cli::config::{CliConfig, LogFormat};
use ntt_cli::roles::RoleChange;
use tracing_subscriber::EnvFilter;

/// Passport registry CLI: issue and revoke non-transferable credentials.
#[derive(Parser, Debug)]
#[command(name = "ntt", version, about)]
struct Cli {
    /// Registry state file (overrides NTT_STATE_FILE).
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Deploy a new registry.
    Deploy(ntt_cli::deploy::DeployArgs),
    /// Grant a role (caller must hold the role's admin role).
    GrantRole(ntt_cli::roles::RoleArgs),
    /// Revoke a role (caller must hold the role's admin role).
    RevokeRole(ntt_cli::roles::RoleArgs),
    /// Give up one of the caller's own roles.
    RenounceRole(ntt_cli::roles::RoleArgs),
    /// Mint a credential (caller must hold TEAM_ROLE).
    Mint(ntt_cli::credentials::MintArgs),
    /// Revoke a credential (caller must hold TEAM_ROLE).
    Revoke(ntt_cli::credentials::RevokeArgs),
    /// Read-only queries.
    Query(ntt_cli::query::QueryArgs),
}

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env()?.with_state_file(cli.state_file);
    init_tracing(config.log_format);

    match cli.command {
        Commands::Deploy(args) => {
            let record = ntt_cli::deploy::run(&args, &config)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::GrantRole(args) => ntt_cli::roles::run(RoleChange::Grant, &args, &config)?,
        Commands::RevokeRole(args) => ntt_cli::roles::run(RoleChange::Revoke, &args, &config)?,
        Commands::RenounceRole(args) => ntt_cli::roles::run(RoleChange::Renounce, &args, &config)?,
        Commands::Mint(args) => ntt_cli::credentials::mint(&args, &config)?,
        Commands::Revoke(args) => ntt_cli::credentials::revoke(&args, &config)?,
        Commands::Query(args) => {
            let value = ntt_cli::query::run(&args, &config)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
