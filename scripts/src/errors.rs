//! Definitions of errors that can occur during the execution of the contract management scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the contract management scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Error reading the deployments file
    ReadDeployments(String),
    /// Error writing the deployments file
    WriteDeployments(String),
    /// Error locating or parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error constructing calldata for a contract method
    CalldataConstruction(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// Invalid script configuration
    Config(String),
    /// The connected chain has no known oracle deployment
    UnsupportedChain(u64),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::Config(s) => write!(f, "invalid configuration: {}", s),
            ScriptError::UnsupportedChain(id) => {
                write!(f, "no AirnodeRrpV0 deployment known for chain {}", id)
            }
        }
    }
}

impl Error for ScriptError {}
