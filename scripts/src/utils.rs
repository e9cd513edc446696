//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr, sync::Arc};

use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::Address,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{errors::ScriptError, types::AddressBook};

/// A JSON-RPC provider with a local signing key attached
pub type LocalWalletHttpClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Sets up the client with which to deploy and call contracts, from a
/// private key and RPC url.
pub async fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<Arc<LocalWalletHttpClient>, ScriptError> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = LocalWallet::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();
    let client = Arc::new(SignerMiddleware::new(
        provider,
        wallet.with_chain_id(chain_id),
    ));

    Ok(client)
}

/// The sender address attached to a client
pub fn sender_address(client: &impl Middleware) -> Result<Address, ScriptError> {
    client
        .default_sender()
        .ok_or_else(|| {
            ScriptError::ClientInitialization("client does not have sender attached".to_string())
        })
}

/// Load a JSON document from `path`, returning `fallback` if the file
/// does not exist
pub fn load_json_or<T: DeserializeOwned>(path: &str, fallback: T) -> Result<T, ScriptError> {
    if !Path::new(path).exists() {
        return Ok(fallback);
    }
    let contents = fs::read_to_string(path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| ScriptError::Serde(e.to_string()))
}

/// Save `data` to `path` as pretty-printed JSON, creating the parent
/// directory if it does not exist
pub fn save_json<T: Serialize>(path: &str, data: &T) -> Result<(), ScriptError> {
    if let Some(dir) = Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| ScriptError::WriteFile(e.to_string()))?;
        }
    }
    let contents =
        serde_json::to_string_pretty(data).map_err(|e| ScriptError::Serde(e.to_string()))?;
    fs::write(path, contents).map_err(|e| ScriptError::WriteFile(e.to_string()))
}

/// Read a required address from the book, failing fast with guidance
/// if the book has not been populated yet
pub fn require_address(addrs: &AddressBook, key: &str) -> Result<Address, ScriptError> {
    let addr = addrs.get(key).ok_or_else(|| {
        ScriptError::MissingAddress(format!("`{key}` not found in address book. Run deploy first."))
    })?;

    Address::from_str(addr).map_err(|e| ScriptError::AddressParsing(e.to_string()))
}

/// Parse an operator-supplied address, falling back if unset
pub fn parse_address_or(value: Option<&str>, fallback: Address) -> Result<Address, ScriptError> {
    match value {
        Some(s) => Address::from_str(s).map_err(|e| ScriptError::AddressParsing(e.to_string())),
        None => Ok(fallback),
    }
}

/// Render an address as the lowercase hex string persisted on disk
pub fn format_address(address: Address) -> String {
    format!("{address:#x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_returns_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let addrs: AddressBook =
            load_json_or(path.to_str().unwrap(), AddressBook::new()).unwrap();
        assert!(addrs.is_empty());
    }

    #[test]
    fn save_creates_parent_directories_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/addresses.json");
        let path = path.to_str().unwrap();

        let mut addrs = AddressBook::new();
        addrs.insert(
            "whitelist".to_string(),
            "0x66f9664f97f2b50f62d13ea064982f936de76657".to_string(),
        );
        save_json(path, &addrs).unwrap();

        // Pretty-printed, one key per line
        let raw = fs::read_to_string(path).unwrap();
        assert!(raw.contains('\n'));

        let loaded: AddressBook = load_json_or(path, AddressBook::new()).unwrap();
        assert_eq!(loaded, addrs);
    }

    #[test]
    fn require_address_parses_present_keys() {
        let mut addrs = AddressBook::new();
        addrs.insert(
            "marketManager".to_string(),
            "0x66f9664f97f2b50f62d13ea064982f936de76657".to_string(),
        );

        let addr = require_address(&addrs, "marketManager").unwrap();
        assert_eq!(format_address(addr), addrs["marketManager"]);
    }

    #[test]
    fn require_address_fails_fast_on_missing_keys() {
        let err = require_address(&AddressBook::new(), "whitelist").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("whitelist"));
        assert!(msg.contains("Run deploy first"));
    }

    #[test]
    fn operator_addresses_fall_back_when_unset() {
        let fallback = Address::repeat_byte(0xab);
        assert_eq!(parse_address_or(None, fallback).unwrap(), fallback);

        let parsed =
            parse_address_or(Some("0x66f9664f97f2b50f62d13ea064982f936de76657"), fallback)
                .unwrap();
        assert_ne!(parsed, fallback);

        assert!(parse_address_or(Some("not-an-address"), fallback).is_err());
    }
}
