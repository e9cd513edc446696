//! Constants used in the deploy scripts

/// Default path of the address book written by the deploy script
pub const DEFAULT_ADDRESSES_PATH: &str = "./artifacts/compliant-market.addresses.json";

/// Default path of the roles snapshot written by the wire script
pub const DEFAULT_ROLES_PATH: &str = "./artifacts/compliant-market.roles.json";

/// Default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "./artifacts/contracts";

/// The whitelist contract key in the address book
pub const WHITELIST_KEY: &str = "whitelist";

/// The governance token contract key in the address book
pub const GOV_TOKEN_KEY: &str = "govToken";

/// The timelock controller contract key in the address book
pub const TIMELOCK_KEY: &str = "timelock";

/// The governor contract key in the address book
pub const GOVERNOR_KEY: &str = "governor";

/// The emergency pause manager contract key in the address book
pub const PAUSE_MANAGER_KEY: &str = "pauseManager";

/// The payment token contract key in the address book
pub const USDC_KEY: &str = "usdc";

/// The market manager contract key in the address book
pub const MARKET_MANAGER_KEY: &str = "marketManager";

/// The reserve pool contract key in the address book
pub const RESERVE_POOL_KEY: &str = "reservePool";

/// Artifact name of the whitelist contract
pub const WHITELIST_ARTIFACT: &str = "Whitelist";

/// Artifact name of the governance token contract
pub const GOV_TOKEN_ARTIFACT: &str = "GovernanceToken";

/// Artifact name of the timelock controller contract
pub const TIMELOCK_ARTIFACT: &str = "TimelockController";

/// Artifact name of the governor contract
pub const GOVERNOR_ARTIFACT: &str = "GenericGovernor";

/// Artifact name of the emergency pause manager contract
pub const PAUSE_MANAGER_ARTIFACT: &str = "EmergencyPauseManager";

/// Artifact name of the flexible token contract
pub const FLEXIBLE_TOKEN_ARTIFACT: &str = "FlexibleToken";

/// Artifact name of the market manager contract
pub const MARKET_MANAGER_ARTIFACT: &str = "MarketManager";

/// Artifact name of the reserve pool contract
pub const RESERVE_POOL_ARTIFACT: &str = "ReservePool";

/// Default minimum timelock delay, in seconds
pub const DEFAULT_TIMELOCK_DELAY_SEC: u64 = 300;

/// Default market fee in basis points (1000-base, so 10 is 1%)
pub const DEFAULT_FEE_BPS: u16 = 10;

/// Display name of the governance token
pub const GOV_TOKEN_NAME: &str = "Compliant Market Governance Token";

/// Ticker symbol of the governance token
pub const GOV_TOKEN_SYMBOL: &str = "CMG";

/// Display name of the governor
pub const GOVERNOR_NAME: &str = "Compliant Market Governor";

/// Decimals of the governance token
pub const GOV_TOKEN_DECIMALS: u8 = 18;

/// Display name of the payment token
pub const PAYMENT_TOKEN_NAME: &str = "USD Coin";

/// Ticker symbol of the payment token
pub const PAYMENT_TOKEN_SYMBOL: &str = "USDC";

/// Decimals of the payment token
pub const PAYMENT_TOKEN_DECIMALS: u8 = 6;

/// Supply cap of both tokens, in whole tokens before decimal scaling
pub const TOKEN_CAP_WHOLE: &str = "1000000000";
