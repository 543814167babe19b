//! Type definitions used throughout the scripts

use std::path::PathBuf;

use alloy_primitives::Address;

/// Paths shared by every command
#[derive(Debug, Clone)]
pub struct ScriptContext {
    /// The JSON file deployed addresses are read from and recorded in
    pub deployments_path: PathBuf,
    /// The directory containing compiled contract artifacts
    pub artifacts_dir: PathBuf,
}

/// Metadata of the connected network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    /// The chain ID
    pub chain_id: u64,
    /// The gas price, in wei
    pub gas_price: u128,
}

/// The contracts created when deploying an upgradeable contract behind a proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyDeployment {
    /// The TransparentUpgradeableProxy, the address users interact with
    pub proxy: Address,
    /// The ProxyAdmin allowed to upgrade the proxy
    pub proxy_admin: Address,
    /// The logic contract the proxy delegates to
    pub implementation: Address,
}
