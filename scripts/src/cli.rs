//! Definitions of CLI arguments and commands for the deploy scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::{deploy, flows, wire},
    constants::{
        DEFAULT_ADDRESSES_PATH, DEFAULT_ARTIFACTS_DIR, DEFAULT_FEE_BPS, DEFAULT_ROLES_PATH,
        DEFAULT_TIMELOCK_DELAY_SEC,
    },
    errors::ScriptError,
};

/// Deployment and wiring automation for the compliant-market contracts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(long, env = "PRIVATE_KEY_DEPLOYER")]
    pub deployer_key: String,

    /// Private key of the guardian
    #[arg(long, env = "PRIVATE_KEY_GUARDIAN")]
    pub guardian_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Path of the JSON address book
    #[arg(long, env = "ADDRESSES_PATH", default_value = DEFAULT_ADDRESSES_PATH)]
    pub addresses_path: String,

    /// The script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The contract management scripts, in the order an operator runs them
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the full contract suite and write the address book
    Deploy(DeployArgs),
    /// Wire compliance, payment and pause relationships between the
    /// deployed contracts
    Wire(WireArgs),
    /// Exercise the emergency-pause governance flow
    Flows,
}

impl Command {
    /// Dispatch to the matching script
    pub async fn run(
        self,
        deployer: Arc<impl Middleware + 'static>,
        guardian: Arc<impl Middleware + 'static>,
        addresses_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, deployer, guardian, addresses_path).await,
            Command::Wire(args) => wire(args, deployer, guardian, addresses_path).await,
            Command::Flows => flows(guardian, addresses_path).await,
        }
    }
}

/// Deploy the contract suite.
///
/// Contracts are deployed sequentially, each awaited before the next; the
/// resulting address book is written once at the end.
#[derive(Args)]
pub struct DeployArgs {
    /// Directory containing the compiled contract artifacts
    #[arg(long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: String,

    /// Minimum timelock delay in seconds
    #[arg(long, env = "TIMELOCK_DELAY_SEC", default_value_t = DEFAULT_TIMELOCK_DELAY_SEC)]
    pub timelock_delay_sec: u64,

    /// Governor voting strategy address, zero address if unset
    #[arg(long, env = "STRATEGY_ADDR")]
    pub strategy: Option<String>,

    /// Fee splitter address, defaults to the deployer
    #[arg(long, env = "FEE_SPLITTER")]
    pub fee_splitter: Option<String>,

    /// Market fee in basis points (1000-base)
    #[arg(long, env = "FEE_BPS", default_value_t = DEFAULT_FEE_BPS)]
    pub fee_bps: u16,

    /// Reserve pool router address, zero address if unset
    #[arg(long, env = "ROUTER")]
    pub router: Option<String>,
}

/// Wire the deployed contracts together.
///
/// Requires the address book written by `deploy`.
#[derive(Args)]
pub struct WireArgs {
    /// Path of the roles snapshot to write
    #[arg(long, env = "ROLES_PATH", default_value = DEFAULT_ROLES_PATH)]
    pub roles_path: String,
}
