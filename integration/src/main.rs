//! Post-deployment checks for the compliant-market contracts. These assume
//! that a devnet is already running locally and that the management scripts
//! have been run against it.

use clap::Parser;
use cli::{Cli, Tests};
use eyre::Result;
use scripts::utils::setup_client;
use tests::{test_deployed, test_paused, test_wired};

mod cli;
mod constants;
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        test,
        deployments_file,
        roles_file,
        priv_key,
        rpc_url,
    } = Cli::parse();

    let client = setup_client(&priv_key, &rpc_url).await?;

    match test {
        Tests::Deployed => test_deployed(&deployments_file)?,
        Tests::Wired => test_wired(client, &deployments_file, &roles_file).await?,
        Tests::Paused => test_paused(client, &deployments_file).await?,
    }

    println!("{test:?} check passed");

    Ok(())
}
