//! Checks run against the deployed contract suite

use std::{fs, str::FromStr, sync::Arc};

use ethers::{providers::Middleware, types::Address};
use eyre::{ensure, Result};
use kit::{
    helpers::{EmergencyPauseManagerHelper, MarketManagerHelper},
    roles::guardian_role,
};
use scripts::{
    constants::{
        GOVERNOR_KEY, GOV_TOKEN_KEY, MARKET_MANAGER_KEY, PAUSE_MANAGER_KEY, RESERVE_POOL_KEY,
        TIMELOCK_KEY, USDC_KEY, WHITELIST_KEY,
    },
    types::{AddressBook, RolesSnapshot},
    utils::{load_json_or, require_address},
};

/// Every key the deploy script records
const EXPECTED_KEYS: [&str; 8] = [
    WHITELIST_KEY,
    GOV_TOKEN_KEY,
    TIMELOCK_KEY,
    GOVERNOR_KEY,
    PAUSE_MANAGER_KEY,
    USDC_KEY,
    MARKET_MANAGER_KEY,
    RESERVE_POOL_KEY,
];

/// Check that the address book is fully populated
pub(crate) fn test_deployed(deployments_file: &str) -> Result<()> {
    let addrs: AddressBook = load_json_or(deployments_file, AddressBook::new())?;
    for key in EXPECTED_KEYS {
        require_address(&addrs, key)?;
    }

    Ok(())
}

/// Check the wiring applied by the wire script
pub(crate) async fn test_wired(
    client: Arc<impl Middleware + 'static>,
    deployments_file: &str,
    roles_file: &str,
) -> Result<()> {
    let addrs: AddressBook = load_json_or(deployments_file, AddressBook::new())?;
    let whitelist_address = require_address(&addrs, WHITELIST_KEY)?;
    let usdc_address = require_address(&addrs, USDC_KEY)?;
    let market_address = require_address(&addrs, MARKET_MANAGER_KEY)?;
    let pause_manager_address = require_address(&addrs, PAUSE_MANAGER_KEY)?;

    let market = MarketManagerHelper::attach(market_address, client.clone());
    let wired = market.whitelist().call().await?;
    ensure!(
        wired == whitelist_address,
        "market whitelist is {wired:#x}, expected {whitelist_address:#x}"
    );

    ensure!(
        market.is_payment_token(usdc_address).call().await?,
        "payment token not accepted"
    );

    let snapshot: RolesSnapshot = serde_json::from_str(&fs::read_to_string(roles_file)?)?;
    let pause_manager = EmergencyPauseManagerHelper::attach(pause_manager_address, client);

    for target in snapshot.targets.all() {
        let target = Address::from_str(target)?;
        ensure!(
            pause_manager.is_registered(target).call().await?,
            "pause target {target:#x} not registered"
        );
    }

    let guardian = Address::from_str(&snapshot.guardian)?;
    ensure!(
        pause_manager
            .has_role(guardian_role(), guardian)
            .call()
            .await?,
        "guardian {guardian:#x} missing GUARDIAN_ROLE"
    );

    Ok(())
}

/// Check that every registered target reports paused
pub(crate) async fn test_paused(
    client: Arc<impl Middleware + 'static>,
    deployments_file: &str,
) -> Result<()> {
    let addrs: AddressBook = load_json_or(deployments_file, AddressBook::new())?;
    let pause_manager_address = require_address(&addrs, PAUSE_MANAGER_KEY)?;

    let pause_manager = EmergencyPauseManagerHelper::attach(pause_manager_address, client);
    ensure!(
        pause_manager.check_all_paused().call().await?,
        "pause manager reports unpaused targets"
    );

    Ok(())
}
