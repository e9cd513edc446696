//! Implementations of the various deploy scripts

use std::sync::Arc;

use ethers::{
    providers::Middleware,
    types::{Address, U256},
    utils::parse_units,
};
use kit::{
    artifacts::Artifacts,
    helpers::{
        EmergencyPauseManagerHelper, FlexibleTokenConfig, FlexibleTokenHelper,
        GenericGovernorHelper, GovernanceTokenConfig, GovernanceTokenHelper, GovernorConfig,
        MarketManagerConfig, MarketManagerHelper, PauseManagerConfig, ReservePoolConfig,
        ReservePoolHelper, TimelockConfig, TimelockControllerHelper, WhitelistConfig,
        WhitelistHelper,
    },
    roles::guardian_role,
};
use tracing::{info, warn};

use crate::{
    cli::{DeployArgs, WireArgs},
    constants::{
        FLEXIBLE_TOKEN_ARTIFACT, GOVERNOR_ARTIFACT, GOVERNOR_KEY, GOVERNOR_NAME,
        GOV_TOKEN_ARTIFACT, GOV_TOKEN_DECIMALS, GOV_TOKEN_KEY, GOV_TOKEN_NAME, GOV_TOKEN_SYMBOL,
        MARKET_MANAGER_ARTIFACT, MARKET_MANAGER_KEY, PAUSE_MANAGER_ARTIFACT, PAUSE_MANAGER_KEY,
        PAYMENT_TOKEN_DECIMALS, PAYMENT_TOKEN_NAME, PAYMENT_TOKEN_SYMBOL, RESERVE_POOL_ARTIFACT,
        RESERVE_POOL_KEY, TIMELOCK_ARTIFACT, TIMELOCK_KEY, TOKEN_CAP_WHOLE, USDC_KEY,
        WHITELIST_ARTIFACT, WHITELIST_KEY,
    },
    errors::ScriptError,
    types::{AddressBook, PauseTargets, RolesSnapshot},
    utils::{
        format_address, load_json_or, parse_address_or, require_address, save_json,
        sender_address,
    },
};

/// A token supply cap scaled to the given decimals
fn token_cap(decimals: u8) -> Result<U256, ScriptError> {
    let cap = parse_units(TOKEN_CAP_WHOLE, decimals as u32)
        .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;
    Ok(cap.into())
}

/// Deploy the full contract suite, writing the address book on success
pub(crate) async fn deploy(
    args: DeployArgs,
    deployer: Arc<impl Middleware + 'static>,
    guardian: Arc<impl Middleware + 'static>,
    addresses_path: &str,
) -> Result<(), ScriptError> {
    let deployer_address = sender_address(&*deployer)?;
    let guardian_address = sender_address(&*guardian)?;
    let artifacts = Artifacts::new(&args.artifacts_dir);

    // No meta-transaction forwarders on fresh deployments
    let forwarders: Vec<Address> = Vec::new();

    let mut addrs = AddressBook::new();

    // 1) Whitelist
    info!("deploying whitelist");
    let whitelist = WhitelistHelper::deploy(
        &artifacts.load(WHITELIST_ARTIFACT)?,
        WhitelistConfig {
            admin: deployer_address,
            trusted_forwarders: forwarders.clone(),
        },
        deployer.clone(),
    )
    .await?;
    addrs.insert(WHITELIST_KEY.to_string(), format_address(whitelist.address()));

    // 2) Governance token
    info!("deploying governance token");
    let gov_token = GovernanceTokenHelper::deploy(
        &artifacts.load(GOV_TOKEN_ARTIFACT)?,
        GovernanceTokenConfig {
            name: GOV_TOKEN_NAME.to_string(),
            symbol: GOV_TOKEN_SYMBOL.to_string(),
            treasury: deployer_address,
            initial_supply: U256::zero(),
            cap: token_cap(GOV_TOKEN_DECIMALS)?,
            transferable: true,
            admin: deployer_address,
            trusted_forwarders: forwarders.clone(),
        },
        deployer.clone(),
    )
    .await?;
    addrs.insert(GOV_TOKEN_KEY.to_string(), format_address(gov_token.address()));

    // 3) Timelock
    info!("deploying timelock");
    let timelock = TimelockControllerHelper::deploy(
        &artifacts.load(TIMELOCK_ARTIFACT)?,
        TimelockConfig {
            min_delay_sec: args.timelock_delay_sec,
            proposers: vec![deployer_address],
            // Anyone may execute a queued proposal
            executors: vec![Address::zero()],
            admin: deployer_address,
            trusted_forwarders: forwarders.clone(),
        },
        deployer.clone(),
    )
    .await?;
    addrs.insert(TIMELOCK_KEY.to_string(), format_address(timelock.address()));

    // 4) Governor
    info!("deploying governor");
    let strategy = parse_address_or(args.strategy.as_deref(), Address::zero())?;
    let governor = GenericGovernorHelper::deploy(
        &artifacts.load(GOVERNOR_ARTIFACT)?,
        GovernorConfig {
            admin: deployer_address,
            name: GOVERNOR_NAME.to_string(),
            token: gov_token.address(),
            timelock: timelock.address(),
            strategy,
            trusted_forwarders: forwarders.clone(),
        },
        deployer.clone(),
    )
    .await?;
    addrs.insert(GOVERNOR_KEY.to_string(), format_address(governor.address()));

    // 5) EmergencyPauseManager
    info!("deploying pause manager");
    let pause_manager = EmergencyPauseManagerHelper::deploy(
        &artifacts.load(PAUSE_MANAGER_ARTIFACT)?,
        PauseManagerConfig {
            admin: deployer_address,
            trusted_forwarders: forwarders.clone(),
        },
        deployer.clone(),
    )
    .await?;
    addrs.insert(
        PAUSE_MANAGER_KEY.to_string(),
        format_address(pause_manager.address()),
    );

    // 6) Payment token (USDC-like)
    info!("deploying payment token");
    let usdc = FlexibleTokenHelper::deploy(
        &artifacts.load(FLEXIBLE_TOKEN_ARTIFACT)?,
        FlexibleTokenConfig {
            name: PAYMENT_TOKEN_NAME.to_string(),
            symbol: PAYMENT_TOKEN_SYMBOL.to_string(),
            treasury: deployer_address,
            initial_supply: U256::zero(),
            cap: token_cap(PAYMENT_TOKEN_DECIMALS)?,
            decimals: PAYMENT_TOKEN_DECIMALS,
            transferable: true,
            admin: deployer_address,
            trusted_forwarders: forwarders.clone(),
        },
        deployer.clone(),
    )
    .await?;
    addrs.insert(USDC_KEY.to_string(), format_address(usdc.address()));

    // 7) MarketManager
    info!("deploying market manager");
    let splitter = parse_address_or(args.fee_splitter.as_deref(), deployer_address)?;
    let market = MarketManagerHelper::deploy(
        &artifacts.load(MARKET_MANAGER_ARTIFACT)?,
        MarketManagerConfig {
            admin: deployer_address,
            splitter,
            fee_bps: args.fee_bps,
            trusted_forwarders: forwarders.clone(),
        },
        deployer.clone(),
    )
    .await?;
    addrs.insert(MARKET_MANAGER_KEY.to_string(), format_address(market.address()));

    // 8) ReservePool
    info!("deploying reserve pool");
    let router = parse_address_or(args.router.as_deref(), Address::zero())?;
    let reserve = ReservePoolHelper::deploy(
        &artifacts.load(RESERVE_POOL_ARTIFACT)?,
        ReservePoolConfig {
            admin: deployer_address,
            router,
            protocol_token: gov_token.address(),
            trusted_forwarders: forwarders,
        },
        deployer.clone(),
    )
    .await?;
    addrs.insert(RESERVE_POOL_KEY.to_string(), format_address(reserve.address()));

    save_json(addresses_path, &addrs)?;

    info!("Deployed addresses: {:#?}", addrs);
    info!("Deployer: {:#x}", deployer_address);
    info!("Guardian: {:#x}", guardian_address);

    Ok(())
}

/// Wire the deployed contracts together, writing the roles snapshot on
/// success
pub(crate) async fn wire(
    args: WireArgs,
    deployer: Arc<impl Middleware + 'static>,
    guardian: Arc<impl Middleware + 'static>,
    addresses_path: &str,
) -> Result<(), ScriptError> {
    let addrs: AddressBook = load_json_or(addresses_path, AddressBook::new())?;
    let whitelist_address = require_address(&addrs, WHITELIST_KEY)?;
    let usdc_address = require_address(&addrs, USDC_KEY)?;
    let market_address = require_address(&addrs, MARKET_MANAGER_KEY)?;
    let reserve_address = require_address(&addrs, RESERVE_POOL_KEY)?;
    let pause_manager_address = require_address(&addrs, PAUSE_MANAGER_KEY)?;

    let guardian_address = sender_address(&*guardian)?;

    let market = MarketManagerHelper::attach(market_address, deployer.clone());
    let usdc = FlexibleTokenHelper::attach(usdc_address, deployer.clone());
    let pause_manager = EmergencyPauseManagerHelper::attach(pause_manager_address, deployer);

    // 1) Compliance wiring
    info!("setting market whitelist");
    market
        .set_whitelist(whitelist_address)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    // Optional: gate token transfers too. Not every token version ships
    // transfer gating, so a rejected call is only a warning.
    match usdc.configure_whitelist(whitelist_address, true).send().await {
        Ok(pending) => {
            pending
                .await
                .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
        }
        Err(e) => warn!("skipping token transfer gating: {e}"),
    }

    // 2) Payment token allowlist
    info!("allowlisting payment token");
    market
        .set_payment_token(usdc_address, true)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    // 3) Register pause targets
    for target in [
        market_address,
        reserve_address,
        whitelist_address,
        usdc_address,
    ] {
        info!("registering pause target {:#x}", target);
        pause_manager
            .register_pausable(target)
            .send()
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    }

    // 4) Grant the guardian emergency pause authority
    info!("granting guardian role to {:#x}", guardian_address);
    pause_manager
        .grant_role(guardian_role(), guardian_address)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    let snapshot = RolesSnapshot {
        targets: PauseTargets {
            market_manager: format_address(market_address),
            reserve_pool: format_address(reserve_address),
            whitelist: format_address(whitelist_address),
            usdc: format_address(usdc_address),
        },
        guardian: format_address(guardian_address),
    };

    save_json(&args.roles_path, &snapshot)?;

    info!("Wiring complete.");
    info!("{:#?}", snapshot);

    Ok(())
}

/// Exercise the emergency-pause flow as the guardian
pub(crate) async fn flows(
    guardian: Arc<impl Middleware + 'static>,
    addresses_path: &str,
) -> Result<(), ScriptError> {
    let addrs: AddressBook = load_json_or(addresses_path, AddressBook::new())?;
    let market_address = require_address(&addrs, MARKET_MANAGER_KEY)?;
    let reserve_address = require_address(&addrs, RESERVE_POOL_KEY)?;
    let pause_manager_address = require_address(&addrs, PAUSE_MANAGER_KEY)?;

    let pause_manager = EmergencyPauseManagerHelper::attach(pause_manager_address, guardian);

    info!("Pausing all targets (guardian)...");
    pause_manager
        .pause_all()
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    let paused = pause_manager
        .check_all_paused()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("All paused: {paused}");

    info!("Unpause requires GOVERNOR_ROLE (typically the timelock).");
    info!("Governance flow: Proposal -> Vote -> Queue (Timelock) -> Execute");
    info!("Typical actions: unpauseAll(), setFee(), setPaymentToken(), reserve parameter updates.");

    info!("Market: {:#x}", market_address);
    info!("Reserve: {:#x}", reserve_address);

    Ok(())
}
