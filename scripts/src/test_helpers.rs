//! Helpers shared by the unit tests of the scripts

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Mutex,
};

use alloy_primitives::{Address, Bytes, TxHash, B256, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;

use crate::{
    client::ChainClient, constants::PROXY_IMPLEMENTATION_STORAGE_SLOT, errors::ScriptError,
    solidity::IProxyAdmin,
};

/// A trimmed-down ABI of the Snatch contract
pub(crate) const SNATCH_ABI: &str = r#"[
    {"type":"constructor","stateMutability":"nonpayable","inputs":[{"name":"_airnodeRrp","type":"address","internalType":"address"}]},
    {"type":"function","name":"initialize","stateMutability":"nonpayable","inputs":[],"outputs":[]},
    {"type":"function","name":"setRequestParameters","stateMutability":"nonpayable","inputs":[
        {"name":"_airnode","type":"address","internalType":"address"},
        {"name":"_endpointIdUint256","type":"bytes32","internalType":"bytes32"},
        {"name":"_endpointIdUint256Array","type":"bytes32","internalType":"bytes32"},
        {"name":"_sponsorWallet","type":"address","internalType":"address"}
    ],"outputs":[]}
]"#;

/// The ABI of an upgradeable contract with an argument-less initializer
pub(crate) const CASH_ABI: &str = r#"[
    {"type":"function","name":"initialize","stateMutability":"nonpayable","inputs":[],"outputs":[]}
]"#;

/// The constructor of the OpenZeppelin 5.x TransparentUpgradeableProxy
pub(crate) const PROXY_ABI: &str = r#"[
    {"type":"constructor","stateMutability":"payable","inputs":[
        {"name":"_logic","type":"address","internalType":"address"},
        {"name":"initialOwner","type":"address","internalType":"address"},
        {"name":"_data","type":"bytes","internalType":"bytes"}
    ]}
]"#;

/// The creation bytecode written into test artifacts
pub(crate) const TEST_BYTECODE: &str = "0x6080604052";

/// A fresh, empty directory unique to the calling test
pub(crate) fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "contract-scripts-{}-{}",
        label,
        std::process::id()
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// The contents of a Hardhat artifact with the given ABI
pub(crate) fn hardhat_artifact(name: &str, abi: &str) -> String {
    format!(
        r#"{{"_format":"hh-sol-artifact-1","contractName":"{name}","abi":{abi},"bytecode":"{TEST_BYTECODE}","deployedBytecode":"0x6080"}}"#
    )
}

/// Write a Hardhat artifact under `artifacts_dir/contracts/<name>.sol/`
pub(crate) fn write_artifact(artifacts_dir: &Path, name: &str, abi: &str) {
    let contract_dir = artifacts_dir.join("contracts").join(format!("{name}.sol"));
    fs::create_dir_all(&contract_dir).unwrap();
    fs::write(
        contract_dir.join(format!("{name}.json")),
        hardhat_artifact(name, abi),
    )
    .unwrap();
}

/// The value of a storage slot holding the given address
pub(crate) fn address_to_slot(address: Address) -> U256 {
    U256::from_be_bytes(address.into_word().0)
}

/// The state recorded by a [`MockClient`]
#[derive(Default)]
pub(crate) struct MockState {
    /// The creation code of each deployment, by deployed address
    pub deployments: Vec<(Address, Bytes)>,
    /// The transactions sent, as (to, calldata)
    pub sent: Vec<(Address, Bytes)>,
    /// Storage slots served by `storage_at`
    pub storage: HashMap<(Address, U256), U256>,
}

/// An in-memory [`ChainClient`]
///
/// Deployed addresses follow the CREATE scheme from the sender's nonce.
/// Upgrade calls to a proxy admin rewrite the implementation slot of the
/// proxy, unless `ignore_upgrades` is set.
pub(crate) struct MockClient {
    /// The sending account
    pub sender: Address,
    /// The chain ID reported
    pub chain_id: u64,
    /// Whether upgrade calls leave the implementation slot untouched
    pub ignore_upgrades: bool,
    /// The recorded state
    pub state: Mutex<MockState>,
}

impl MockClient {
    /// A client on the given chain with no deployments or storage
    pub(crate) fn new(chain_id: u64) -> Self {
        Self {
            sender: Address::repeat_byte(0xde),
            chain_id,
            ignore_upgrades: false,
            state: Mutex::new(MockState::default()),
        }
    }

    /// The address the `n`-th transaction of the sender deploys to
    pub(crate) fn nth_address(&self, nonce: u64) -> Address {
        self.sender.create(nonce)
    }

    /// Set a storage slot of a contract
    pub(crate) fn set_storage(&self, address: Address, slot: &str, value: U256) {
        let slot = U256::from_be_bytes(B256::from_str(slot).unwrap().0);
        self.state.lock().unwrap().storage.insert((address, slot), value);
    }

    /// The transactions sent so far
    pub(crate) fn sent(&self) -> Vec<(Address, Bytes)> {
        self.state.lock().unwrap().sent.clone()
    }

    /// The contracts deployed so far
    pub(crate) fn deployments(&self) -> Vec<(Address, Bytes)> {
        self.state.lock().unwrap().deployments.clone()
    }

    /// The number of transactions sent by the sender
    fn nonce(state: &MockState) -> u64 {
        (state.deployments.len() + state.sent.len()) as u64
    }
}

#[async_trait]
impl ChainClient for MockClient {
    fn sender(&self) -> Address {
        self.sender
    }

    async fn chain_id(&self) -> Result<u64, ScriptError> {
        Ok(self.chain_id)
    }

    async fn gas_price(&self) -> Result<u128, ScriptError> {
        Ok(1_000_000_000)
    }

    async fn deploy(&self, code: Bytes) -> Result<Address, ScriptError> {
        let mut state = self.state.lock().unwrap();
        let address = self.sender.create(Self::nonce(&state));
        state.deployments.push((address, code));
        Ok(address)
    }

    async fn send(&self, to: Address, calldata: Bytes) -> Result<TxHash, ScriptError> {
        let mut state = self.state.lock().unwrap();
        let upgrade = IProxyAdmin::upgradeAndCallCall::abi_decode(&calldata)
            .map(|call| (call.proxy, call.implementation))
            .or_else(|_| {
                IProxyAdmin::upgradeCall::abi_decode(&calldata)
                    .map(|call| (call.proxy, call.implementation))
            });

        if let (Ok((proxy, implementation)), false) = (upgrade, self.ignore_upgrades) {
            let slot = U256::from_be_bytes(
                B256::from_str(PROXY_IMPLEMENTATION_STORAGE_SLOT).unwrap().0,
            );
            state
                .storage
                .insert((proxy, slot), address_to_slot(implementation));
        }

        let hash = TxHash::with_last_byte(Self::nonce(&state) as u8);
        state.sent.push((to, calldata));
        Ok(hash)
    }

    async fn storage_at(&self, address: Address, slot: U256) -> Result<U256, ScriptError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .storage
            .get(&(address, slot))
            .copied()
            .unwrap_or(U256::ZERO))
    }
}
