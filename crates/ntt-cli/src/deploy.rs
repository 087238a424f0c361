//! # Deploy Subcommand
//!
//! Constructs a fresh registry, has the manager grant Team to each listed
//! member, then writes the state file and a deployment record beside it.

use anyhow::{bail, Context};
use clap::Args;
use ntt_core::{parse_address, Address};
use ntt_registry::{PassportRegistry, Role, SystemClock};
use serde::Serialize;

use crate::config::CliConfig;
use crate::state;

/// Arguments for the deploy subcommand.
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Registry name.
    #[arg(long)]
    pub name: String,

    /// Registry symbol.
    #[arg(long)]
    pub symbol: String,

    /// Identity that receives the Admin role.
    #[arg(long, value_parser = parse_address)]
    pub deployer: Address,

    /// Identity that receives the Manager role.
    #[arg(long, value_parser = parse_address)]
    pub manager: Address,

    /// Identities the manager grants Team to after deployment.
    #[arg(long = "team", value_parser = parse_address)]
    pub team: Vec<Address>,

    /// Overwrite an existing state file.
    #[arg(long)]
    pub force: bool,
}

/// Who was set up by a deployment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    /// Path of the state file holding the registry.
    pub state_file: String,
    /// Registry name.
    pub name: String,
    /// Registry symbol.
    pub symbol: String,
    /// Admin identity.
    pub admin: Address,
    /// Manager identity.
    pub manager: Address,
    /// Team members granted at deployment.
    pub team_members: Vec<Address>,
}

/// Run the deploy subcommand.
pub fn run(args: &DeployArgs, config: &CliConfig) -> anyhow::Result<DeploymentRecord> {
    if config.state_file.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to replace it",
            config.state_file.display()
        );
    }

    let mut registry = PassportRegistry::construct(
        args.deployer,
        args.name.clone(),
        args.symbol.clone(),
        args.manager,
        SystemClock,
    )
    .context("constructing registry")?;

    for member in &args.team {
        registry
            .grant_role(&args.manager, Role::Team, member)
            .with_context(|| format!("granting TEAM_ROLE to {member}"))?;
    }

    state::save(&config.state_file, &registry)?;

    let record = DeploymentRecord {
        state_file: config.state_file.display().to_string(),
        name: args.name.clone(),
        symbol: args.symbol.clone(),
        admin: args.deployer,
        manager: args.manager,
        team_members: args.team.clone(),
    };
    state::write_json(&config.deployment_record_path(), &record)?;

    tracing::info!(
        state_file = %record.state_file,
        admin = %record.admin,
        manager = %record.manager,
        team = record.team_members.len(),
        "registry deployed"
    );
    Ok(record)
}
