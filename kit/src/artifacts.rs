//! Runtime loading of compiled contract artifacts
//!
//! The contracts are compiled out of repo; their build writes one JSON
//! artifact per contract (an `abi` array and the creation `bytecode`)
//! into a directory the automation is pointed at.

use std::{
    fs,
    path::{Path, PathBuf},
};

use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;

use crate::errors::KitError;

/// A compiled contract artifact: the ABI and creation bytecode
#[derive(Clone, Debug, Deserialize)]
pub struct ContractArtifact {
    /// The contract ABI
    pub abi: Abi,
    /// The creation bytecode, hex-encoded
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON text
    pub fn from_json(json: &str) -> Result<Self, KitError> {
        serde_json::from_str(json).map_err(|e| KitError::ArtifactParsing(e.to_string()))
    }
}

/// A directory of compiled contract artifacts, one `<Name>.json` per contract
#[derive(Clone, Debug)]
pub struct Artifacts {
    /// The directory the artifacts live in
    dir: PathBuf,
}

impl Artifacts {
    /// Point at a directory of compiled artifacts
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Load the artifact for the named contract
    pub fn load(&self, name: &str) -> Result<ContractArtifact, KitError> {
        let path = self.dir.join(format!("{name}.json"));
        let contents = fs::read_to_string(&path)
            .map_err(|e| KitError::ArtifactRead(format!("{}: {}", path.display(), e)))?;
        ContractArtifact::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An artifact covering a constructor and a single method
    const ARTIFACT_JSON: &str = r#"{
        "contractName": "Whitelist",
        "abi": [
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [
                    { "name": "admin", "type": "address" },
                    { "name": "trustedForwarders", "type": "address[]" }
                ]
            },
            {
                "type": "function",
                "name": "isWhitelisted",
                "stateMutability": "view",
                "inputs": [{ "name": "account", "type": "address" }],
                "outputs": [{ "name": "", "type": "bool" }]
            }
        ],
        "bytecode": "0x6080604052"
    }"#;

    #[test]
    fn parses_standard_artifact() {
        let artifact = ContractArtifact::from_json(ARTIFACT_JSON).unwrap();
        assert!(artifact.abi.constructor.is_some());
        assert!(artifact.abi.function("isWhitelisted").is_ok());
        assert_eq!(artifact.bytecode.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn rejects_artifact_without_bytecode() {
        let json = r#"{ "abi": [] }"#;
        assert!(matches!(
            ContractArtifact::from_json(json),
            Err(KitError::ArtifactParsing(_))
        ));
    }

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Whitelist.json"), ARTIFACT_JSON).unwrap();

        let artifacts = Artifacts::new(dir.path());
        assert!(artifacts.load("Whitelist").is_ok());
    }

    #[test]
    fn missing_artifact_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = Artifacts::new(dir.path());

        let err = artifacts.load("MarketManager").unwrap_err();
        assert!(err.to_string().contains("MarketManager.json"));
    }
}
