//! Definition of the CLI arguments for the post-deployment checks

use clap::{Parser, ValueEnum};
use scripts::constants::{DEFAULT_ADDRESSES_PATH, DEFAULT_ROLES_PATH};

use crate::constants::{DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY};

/// CLI tool for checking the deployed contract suite against a running
/// devnet node.
///
/// Assumes that the deploy and wire scripts have already been run against
/// the devnet.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Check to run
    #[arg(short, long)]
    pub(crate) test: Tests,

    /// Path of the address book written by the deploy script
    #[arg(short, long, env = "ADDRESSES_PATH", default_value = DEFAULT_ADDRESSES_PATH)]
    pub(crate) deployments_file: String,

    /// Path of the roles snapshot written by the wire script
    #[arg(long, env = "ROLES_PATH", default_value = DEFAULT_ROLES_PATH)]
    pub(crate) roles_file: String,

    /// Operator private key, defaults to the standard devnet key
    #[arg(short, long, env = "PRIVATE_KEY_DEPLOYER", default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Devnet RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}

/// The available post-deployment checks
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Tests {
    /// The address book is fully populated
    Deployed,
    /// Compliance, payment and pause wiring is in place
    Wired,
    /// Every pause target reports paused
    Paused,
}
