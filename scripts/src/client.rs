//! The RPC client through which the scripts talk to a node

use std::str::FromStr;

use alloy::{
    network::TransactionBuilder,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner},
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::ScriptError;

/// The chain operations the deploy scripts are built from
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// The account sending transactions
    fn sender(&self) -> Address;

    /// The ID of the connected chain
    async fn chain_id(&self) -> Result<u64, ScriptError>;

    /// The current gas price, in wei
    async fn gas_price(&self) -> Result<u128, ScriptError>;

    /// Send a contract creation transaction and return the address of the
    /// deployed contract once it is mined
    async fn deploy(&self, code: Bytes) -> Result<Address, ScriptError>;

    /// Send a transaction calling `to` and wait for it to be mined successfully
    async fn send(&self, to: Address, calldata: Bytes) -> Result<TxHash, ScriptError>;

    /// Read a storage slot of the given contract
    async fn storage_at(&self, address: Address, slot: U256) -> Result<U256, ScriptError>;
}

/// Where the deployer's signing key comes from
#[derive(Clone)]
pub enum KeySource {
    /// A hex-encoded private key
    PrivateKey(String),
    /// A BIP-39 mnemonic and the index of the account derived from it
    Mnemonic {
        /// The mnemonic phrase
        phrase: String,
        /// The derivation index
        index: u32,
    },
}

impl KeySource {
    /// Build the local signer described by this key source
    pub fn signer(&self) -> Result<PrivateKeySigner, ScriptError> {
        match self {
            KeySource::PrivateKey(priv_key) => PrivateKeySigner::from_str(priv_key)
                .map_err(|e| ScriptError::ClientInitialization(e.to_string())),
            KeySource::Mnemonic { phrase, index } => MnemonicBuilder::<English>::default()
                .phrase(phrase.as_str())
                .index(*index)
                .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
                .build()
                .map_err(|e| ScriptError::ClientInitialization(e.to_string())),
        }
    }
}

/// A [`ChainClient`] backed by an alloy provider over HTTP
pub struct RpcClient {
    /// The underlying provider
    provider: DynProvider,
    /// The address of the signer attached to the provider, if any
    sender: Address,
}

impl RpcClient {
    /// Wait for the receipt of a sent transaction, failing if it reverted
    async fn send_and_confirm(
        &self,
        tx: TransactionRequest,
    ) -> Result<TransactionReceipt, ScriptError> {
        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

        if !receipt.status() {
            return Err(ScriptError::ContractInteraction(format!(
                "transaction {:#x} reverted",
                receipt.transaction_hash
            )));
        }

        debug!(
            "Transaction {:#x} mined in block {:?}",
            receipt.transaction_hash, receipt.block_number
        );
        Ok(receipt)
    }
}

#[async_trait]
impl ChainClient for RpcClient {
    fn sender(&self) -> Address {
        self.sender
    }

    async fn chain_id(&self) -> Result<u64, ScriptError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }

    async fn gas_price(&self) -> Result<u128, ScriptError> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }

    async fn deploy(&self, code: Bytes) -> Result<Address, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(self.sender)
            .with_deploy_code(code);

        let receipt = self
            .send_and_confirm(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(format!(
                "receipt of {:#x} carries no contract address",
                receipt.transaction_hash
            ))
        })
    }

    async fn send(&self, to: Address, calldata: Bytes) -> Result<TxHash, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(self.sender)
            .with_to(to)
            .with_input(calldata);

        Ok(self.send_and_confirm(tx).await?.transaction_hash)
    }

    async fn storage_at(&self, address: Address, slot: U256) -> Result<U256, ScriptError> {
        self.provider
            .get_storage_at(address, slot)
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }
}

/// Parse an RPC URL
fn parse_rpc_url(rpc_url: &str) -> Result<Url, ScriptError> {
    Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))
}

/// Sets up a signing client for the given key source and RPC URL
pub async fn setup_client(key: &KeySource, rpc_url: &str) -> Result<RpcClient, ScriptError> {
    let url = parse_rpc_url(rpc_url)?;
    let signer = key.signer()?;
    let sender = signer.address();

    let provider = ProviderBuilder::new().wallet(signer).connect_http(url);
    let provider = DynProvider::new(provider);

    info!("Using account {:#x}", sender);
    Ok(RpcClient { provider, sender })
}

/// Sets up a client which can only read from the chain
///
/// Any transaction sent through this client is rejected by the node, as no
/// signer is attached.
pub fn setup_read_only_client(rpc_url: &str) -> Result<RpcClient, ScriptError> {
    let url = parse_rpc_url(rpc_url)?;
    let provider = DynProvider::new(ProviderBuilder::new().connect_http(url));

    Ok(RpcClient {
        provider,
        sender: Address::ZERO,
    })
}
