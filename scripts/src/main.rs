//! Entry point for the compliant-market contract management scripts

use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError, utils::setup_client};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    dotenvy::dotenv().ok();

    let Cli {
        deployer_key,
        guardian_key,
        rpc_url,
        addresses_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let deployer = setup_client(&deployer_key, &rpc_url).await?;
    let guardian = setup_client(&guardian_key, &rpc_url).await?;

    command.run(deployer, guardian, &addresses_path).await
}
