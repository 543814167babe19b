//! Constants used in the deploy scripts

/// The name of the artifact of the OpenZeppelin TransparentUpgradeableProxy contract
///
/// Compiled from https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/transparent/TransparentUpgradeableProxy.sol
pub const PROXY_ARTIFACT_NAME: &str = "TransparentUpgradeableProxy";

/// The storage slot containing the proxy admin contract address in the upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#admin-address
pub const PROXY_ADMIN_STORAGE_SLOT: &str =
    "0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103";

/// The storage slot containing the implementation address in the upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#logic-contract-address
pub const PROXY_IMPLEMENTATION_STORAGE_SLOT: &str =
    "0x360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc";

/// The number of bytes stored in a single storage slot
pub const NUM_BYTES_STORAGE_SLOT: usize = 32;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The initializer invoked through the proxy when none is given
pub const DEFAULT_INITIALIZER: &str = "initialize";

/// The default RPC URL, a local Hardhat / Anvil node
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The default directory containing compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The extension of a compiled contract artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The suffix of the deployments key of a proxy contract
pub const PROXY_KEY_SUFFIX: &str = "Proxy";

/// The suffix of the deployments key of a proxy admin contract
pub const PROXY_ADMIN_KEY_SUFFIX: &str = "ProxyAdmin";

/// The suffix of the deployments key of an implementation contract
pub const IMPLEMENTATION_KEY_SUFFIX: &str = "Implementation";

/// The deployments key of the Snatch pool payment token
pub const PAYMENT_TOKEN_KEY: &str = "WakandaUSD";

/// The deployments key of the Snatch rare prize token
pub const RARE_PRIZE_TOKEN_KEY: &str = "Diamond";

/// The name of the environment variable holding the deployer's private key
pub const PKEY_ENV_VAR: &str = "PKEY";

/// The name of the environment variable holding the deployer's HD wallet mnemonic
pub const MNEMONIC_ENV_VAR: &str = "HDWALLET_MNEMONIC";

/// The name of the environment variable holding the RPC URL
pub const RPC_URL_ENV_VAR: &str = "RPC_URL";
