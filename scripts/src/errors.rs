//! Definitions of errors that can occur during the execution of the contract management scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use kit::errors::KitError;

/// Errors that can occur during the execution of the contract management scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error reading a persisted JSON document
    ReadFile(String),
    /// Error writing a persisted JSON document
    WriteFile(String),
    /// A required address is missing from the address book
    MissingAddress(String),
    /// Error parsing an address supplied by the operator or the address book
    AddressParsing(String),
    /// Error constructing calldata for a contract method
    CalldataConstruction(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// Error de/serializing a persisted document
    Serde(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ReadFile(s) => write!(f, "error reading file: {}", s),
            ScriptError::WriteFile(s) => write!(f, "error writing file: {}", s),
            ScriptError::MissingAddress(s) => write!(f, "missing address: {}", s),
            ScriptError::AddressParsing(s) => write!(f, "error parsing address: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::Serde(s) => write!(f, "error de/serializing: {}", s),
        }
    }
}

impl Error for ScriptError {}

impl From<KitError> for ScriptError {
    fn from(err: KitError) -> Self {
        match err {
            KitError::ArtifactRead(s) => ScriptError::ReadFile(s),
            KitError::ArtifactParsing(s) => ScriptError::Serde(s),
            KitError::ContractDeployment(s) => ScriptError::ContractDeployment(s),
            KitError::ContractInteraction(s) => ScriptError::ContractInteraction(s),
        }
    }
}
