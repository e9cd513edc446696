//! Type definitions used throughout the scripts

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The address book: logical contract name to deployed address, persisted
/// by the deploy script and read by everything downstream
pub type AddressBook = BTreeMap<String, String>;

/// Snapshot of the wiring applied by the wire script
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RolesSnapshot {
    /// The contracts registered with the pause manager
    pub targets: PauseTargets,
    /// The guardian signer granted pause authority
    pub guardian: String,
}

/// The contracts registered as pause targets
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseTargets {
    /// The market manager address
    pub market_manager: String,
    /// The reserve pool address
    pub reserve_pool: String,
    /// The whitelist address
    pub whitelist: String,
    /// The payment token address
    pub usdc: String,
}

impl PauseTargets {
    /// The target addresses, in registration order
    pub fn all(&self) -> [&str; 4] {
        [
            &self.market_manager,
            &self.reserve_pool,
            &self.whitelist,
            &self.usdc,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_with_camel_case_targets() {
        let snapshot = RolesSnapshot {
            targets: PauseTargets {
                market_manager: "0x01".to_string(),
                reserve_pool: "0x02".to_string(),
                whitelist: "0x03".to_string(),
                usdc: "0x04".to_string(),
            },
            guardian: "0x05".to_string(),
        };

        let json: serde_json::Value = serde_json::from_str(
            &serde_json::to_string(&snapshot).unwrap(),
        )
        .unwrap();

        assert_eq!(json["targets"]["marketManager"], "0x01");
        assert_eq!(json["targets"]["reservePool"], "0x02");
        assert_eq!(json["targets"]["whitelist"], "0x03");
        assert_eq!(json["targets"]["usdc"], "0x04");
        assert_eq!(json["guardian"], "0x05");
    }
}
