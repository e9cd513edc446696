//! Definitions of errors that can occur while driving the contract suite

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur while driving the contract suite
#[derive(Debug)]
pub enum KitError {
    /// Error reading a compiled contract artifact
    ArtifactRead(String),
    /// Error parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
}

impl Display for KitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            KitError::ArtifactRead(s) => write!(f, "error reading artifact: {}", s),
            KitError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            KitError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            KitError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
        }
    }
}

impl Error for KitError {}
