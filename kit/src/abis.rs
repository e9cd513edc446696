//! Typed bindings for the compliant-market contracts
//!
//! Each fragment lists only the methods the automation calls; the full
//! interfaces live with the contracts.

use ethers::contract::abigen;

abigen!(
    Whitelist,
    r#"[
        function isWhitelisted(address account) external view returns (bool)
    ]"#
);

abigen!(
    GovernanceToken,
    r#"[
        function totalSupply() external view returns (uint256)
        function balanceOf(address account) external view returns (uint256)
    ]"#
);

abigen!(
    FlexibleToken,
    r#"[
        function configureWhitelist(address whitelist, bool enabled) external
        function decimals() external view returns (uint8)
    ]"#
);

abigen!(
    TimelockController,
    r#"[
        function getMinDelay() external view returns (uint256)
    ]"#
);

abigen!(
    GenericGovernor,
    r#"[
        function name() external view returns (string)
    ]"#
);

abigen!(
    EmergencyPauseManager,
    r#"[
        function registerPausable(address target) external
        function isRegistered(address target) external view returns (bool)
        function pauseAll() external
        function unpauseAll() external
        function checkAllPaused() external view returns (bool)
        function grantRole(bytes32 role, address account) external
        function hasRole(bytes32 role, address account) external view returns (bool)
    ]"#
);

abigen!(
    MarketManager,
    r#"[
        function setWhitelist(address whitelist) external
        function whitelist() external view returns (address)
        function setPaymentToken(address token, bool accepted) external
        function isPaymentToken(address token) external view returns (bool)
        function setFee(uint256 bps) external
    ]"#
);

abigen!(
    ReservePool,
    r#"[
        function router() external view returns (address)
        function protocolToken() external view returns (address)
    ]"#
);
