//! Per-contract helper factories
//!
//! Each helper mirrors the two entry points the automation needs:
//! `deploy(artifact, config, client)` for a fresh deployment and
//! `attach(address, client)` for an already-deployed instance. Deployment
//! goes through a [`ContractFactory`] built from the contract's compiled
//! artifact; both entry points hand back the typed binding from
//! [`crate::abis`].

use std::sync::Arc;

use ethers::{
    abi::Tokenize,
    contract::ContractFactory,
    providers::Middleware,
    types::{Address, U256},
};

use crate::{
    abis::{
        EmergencyPauseManager, FlexibleToken, GenericGovernor, GovernanceToken, MarketManager,
        ReservePool, TimelockController, Whitelist,
    },
    artifacts::ContractArtifact,
    errors::KitError,
};

/// The number of confirmations to wait on deployment transactions
const NUM_DEPLOY_CONFIRMATIONS: usize = 0;

/// Deploy a contract from its artifact, returning the deployed address
async fn deploy_contract<M, T>(
    artifact: &ContractArtifact,
    constructor_args: T,
    client: Arc<M>,
) -> Result<Address, KitError>
where
    M: Middleware + 'static,
    T: Tokenize,
{
    let factory = ContractFactory::new(artifact.abi.clone(), artifact.bytecode.clone(), client);

    let contract = factory
        .deploy(constructor_args)
        .map_err(|e| KitError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| KitError::ContractDeployment(e.to_string()))?;

    Ok(contract.address())
}

// ------------------------
// | Deploy configuration |
// ------------------------

/// Constructor configuration for the Whitelist contract
#[derive(Clone, Debug)]
pub struct WhitelistConfig {
    /// The admin of the allowlist
    pub admin: Address,
    /// Meta-transaction forwarders trusted by the contract
    pub trusted_forwarders: Vec<Address>,
}

impl WhitelistConfig {
    /// The constructor arguments in ABI order
    fn constructor_args(self) -> impl Tokenize {
        (self.admin, self.trusted_forwarders)
    }
}

/// Constructor configuration for the governance token
#[derive(Clone, Debug)]
pub struct GovernanceTokenConfig {
    /// Token display name
    pub name: String,
    /// Token ticker symbol
    pub symbol: String,
    /// Recipient of the initial supply
    pub treasury: Address,
    /// Supply minted at deployment
    pub initial_supply: U256,
    /// Hard cap on the total supply
    pub cap: U256,
    /// Whether the token is transferable
    pub transferable: bool,
    /// The token admin
    pub admin: Address,
    /// Meta-transaction forwarders trusted by the contract
    pub trusted_forwarders: Vec<Address>,
}

impl GovernanceTokenConfig {
    /// The constructor arguments in ABI order
    fn constructor_args(self) -> impl Tokenize {
        (
            self.name,
            self.symbol,
            self.treasury,
            self.initial_supply,
            self.cap,
            self.transferable,
            self.admin,
            self.trusted_forwarders,
        )
    }
}

/// Constructor configuration for the flexible (payment) token
#[derive(Clone, Debug)]
pub struct FlexibleTokenConfig {
    /// Token display name
    pub name: String,
    /// Token ticker symbol
    pub symbol: String,
    /// Recipient of the initial supply
    pub treasury: Address,
    /// Supply minted at deployment
    pub initial_supply: U256,
    /// Hard cap on the total supply
    pub cap: U256,
    /// Token decimals
    pub decimals: u8,
    /// Whether the token is transferable
    pub transferable: bool,
    /// The token admin
    pub admin: Address,
    /// Meta-transaction forwarders trusted by the contract
    pub trusted_forwarders: Vec<Address>,
}

impl FlexibleTokenConfig {
    /// The constructor arguments in ABI order
    fn constructor_args(self) -> impl Tokenize {
        (
            self.name,
            self.symbol,
            self.treasury,
            self.initial_supply,
            self.cap,
            U256::from(self.decimals),
            self.transferable,
            self.admin,
            self.trusted_forwarders,
        )
    }
}

/// Constructor configuration for the timelock controller
#[derive(Clone, Debug)]
pub struct TimelockConfig {
    /// Minimum delay between queueing and execution, in seconds
    pub min_delay_sec: u64,
    /// Accounts allowed to queue operations
    pub proposers: Vec<Address>,
    /// Accounts allowed to execute queued operations; the zero address
    /// opens execution to anyone
    pub executors: Vec<Address>,
    /// The timelock admin
    pub admin: Address,
    /// Meta-transaction forwarders trusted by the contract
    pub trusted_forwarders: Vec<Address>,
}

impl TimelockConfig {
    /// The constructor arguments in ABI order
    fn constructor_args(self) -> impl Tokenize {
        (
            U256::from(self.min_delay_sec),
            self.proposers,
            self.executors,
            self.admin,
            self.trusted_forwarders,
        )
    }
}

/// Constructor configuration for the governor
#[derive(Clone, Debug)]
pub struct GovernorConfig {
    /// The governor admin
    pub admin: Address,
    /// Display name of the governor
    pub name: String,
    /// The voting token
    pub token: Address,
    /// The timelock executing passed proposals
    pub timelock: Address,
    /// Optional voting strategy, zero address if unused
    pub strategy: Address,
    /// Meta-transaction forwarders trusted by the contract
    pub trusted_forwarders: Vec<Address>,
}

impl GovernorConfig {
    /// The constructor arguments in ABI order
    fn constructor_args(self) -> impl Tokenize {
        (
            self.admin,
            self.name,
            self.token,
            self.timelock,
            self.strategy,
            self.trusted_forwarders,
        )
    }
}

/// Constructor configuration for the emergency pause manager
#[derive(Clone, Debug)]
pub struct PauseManagerConfig {
    /// The pause manager admin
    pub admin: Address,
    /// Meta-transaction forwarders trusted by the contract
    pub trusted_forwarders: Vec<Address>,
}

impl PauseManagerConfig {
    /// The constructor arguments in ABI order
    fn constructor_args(self) -> impl Tokenize {
        (self.admin, self.trusted_forwarders)
    }
}

/// Constructor configuration for the market manager
#[derive(Clone, Debug)]
pub struct MarketManagerConfig {
    /// The market admin
    pub admin: Address,
    /// Recipient splitting collected fees
    pub splitter: Address,
    /// Fee in basis points (1000-base)
    pub fee_bps: u16,
    /// Meta-transaction forwarders trusted by the contract
    pub trusted_forwarders: Vec<Address>,
}

impl MarketManagerConfig {
    /// The constructor arguments in ABI order
    fn constructor_args(self) -> impl Tokenize {
        (
            self.admin,
            self.splitter,
            U256::from(self.fee_bps),
            self.trusted_forwarders,
        )
    }
}

/// Constructor configuration for the reserve pool
#[derive(Clone, Debug)]
pub struct ReservePoolConfig {
    /// The pool admin
    pub admin: Address,
    /// Swap router used for reserve rebalancing, zero address if unused
    pub router: Address,
    /// The protocol token backing the reserve
    pub protocol_token: Address,
    /// Meta-transaction forwarders trusted by the contract
    pub trusted_forwarders: Vec<Address>,
}

impl ReservePoolConfig {
    /// The constructor arguments in ABI order
    fn constructor_args(self) -> impl Tokenize {
        (
            self.admin,
            self.router,
            self.protocol_token,
            self.trusted_forwarders,
        )
    }
}

// -----------
// | Helpers |
// -----------

/// Declare a helper factory for one contract type
macro_rules! contract_helper {
    ($(#[$attr:meta])* $helper:ident, $binding:ident, $config:ident) => {
        $(#[$attr])*
        pub struct $helper;

        impl $helper {
            /// Deploy a fresh instance from its compiled artifact
            pub async fn deploy<M: Middleware + 'static>(
                artifact: &ContractArtifact,
                config: $config,
                client: Arc<M>,
            ) -> Result<$binding<M>, KitError> {
                let address =
                    deploy_contract(artifact, config.constructor_args(), client.clone()).await?;
                Ok($binding::new(address, client))
            }

            /// Attach to an already-deployed instance
            pub fn attach<M: Middleware>(address: Address, client: Arc<M>) -> $binding<M> {
                $binding::new(address, client)
            }
        }
    };
}

contract_helper!(
    /// Factory for the Whitelist allowlist contract
    WhitelistHelper,
    Whitelist,
    WhitelistConfig
);

contract_helper!(
    /// Factory for the governance token contract
    GovernanceTokenHelper,
    GovernanceToken,
    GovernanceTokenConfig
);

contract_helper!(
    /// Factory for the flexible (payment) token contract
    FlexibleTokenHelper,
    FlexibleToken,
    FlexibleTokenConfig
);

contract_helper!(
    /// Factory for the timelock controller contract
    TimelockControllerHelper,
    TimelockController,
    TimelockConfig
);

contract_helper!(
    /// Factory for the governor contract
    GenericGovernorHelper,
    GenericGovernor,
    GovernorConfig
);

contract_helper!(
    /// Factory for the emergency pause manager contract
    EmergencyPauseManagerHelper,
    EmergencyPauseManager,
    PauseManagerConfig
);

contract_helper!(
    /// Factory for the market manager contract
    MarketManagerHelper,
    MarketManager,
    MarketManagerConfig
);

contract_helper!(
    /// Factory for the reserve pool contract
    ReservePoolHelper,
    ReservePool,
    ReservePoolConfig
);

#[cfg(test)]
mod tests {
    use ethers::abi::Token;

    use super::*;

    #[test]
    fn whitelist_args_tokenize_in_abi_order() {
        let admin = Address::repeat_byte(0x11);
        let config = WhitelistConfig {
            admin,
            trusted_forwarders: vec![],
        };

        assert_eq!(
            config.constructor_args().into_tokens(),
            vec![Token::Address(admin), Token::Array(vec![])]
        );
    }

    #[test]
    fn market_manager_args_tokenize_in_abi_order() {
        let admin = Address::repeat_byte(0x22);
        let splitter = Address::repeat_byte(0x33);
        let config = MarketManagerConfig {
            admin,
            splitter,
            fee_bps: 10,
            trusted_forwarders: vec![admin],
        };

        assert_eq!(
            config.constructor_args().into_tokens(),
            vec![
                Token::Address(admin),
                Token::Address(splitter),
                Token::Uint(U256::from(10)),
                Token::Array(vec![Token::Address(admin)]),
            ]
        );
    }

    #[test]
    fn token_decimals_widen_to_uint() {
        let admin = Address::repeat_byte(0x44);
        let config = FlexibleTokenConfig {
            name: "USD Coin".to_string(),
            symbol: "USDC".to_string(),
            treasury: admin,
            initial_supply: U256::zero(),
            cap: U256::from(1_000_000u64),
            decimals: 6,
            transferable: true,
            admin,
            trusted_forwarders: vec![],
        };

        let tokens = config.constructor_args().into_tokens();
        assert_eq!(tokens[5], Token::Uint(U256::from(6)));
        assert_eq!(tokens.len(), 9);
    }
}
