//! Utilities for the deploy scripts.

use std::str::FromStr;

use alloy_primitives::{Address, Bytes, B256, U256};

use crate::{
    client::ChainClient,
    constants::{
        IMPLEMENTATION_KEY_SUFFIX, NUM_BYTES_ADDRESS, NUM_BYTES_STORAGE_SLOT,
        PROXY_ADMIN_KEY_SUFFIX, PROXY_KEY_SUFFIX,
    },
    errors::ScriptError,
};

/// Parse hex-encoded calldata, with or without a `0x` prefix
pub fn parse_hex_calldata(calldata: &str) -> Result<Bytes, ScriptError> {
    Bytes::from_str(calldata).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}

/// Parse a hex-encoded 32 byte value, e.g. an oracle endpoint ID
pub fn parse_bytes32(value: &str) -> Result<B256, ScriptError> {
    B256::from_str(value).map_err(|e| ScriptError::Config(format!("invalid bytes32 `{value}`: {e}")))
}

/// Parse a hex-encoded storage slot
pub fn storage_slot(slot: &str) -> Result<U256, ScriptError> {
    Ok(U256::from_be_bytes(parse_bytes32(slot)?.0))
}

/// Interpret the value of a storage slot as an address, i.e. its low 20 bytes
pub fn slot_to_address(value: U256) -> Address {
    Address::from_slice(
        &value.to_be_bytes::<NUM_BYTES_STORAGE_SLOT>()
            [NUM_BYTES_STORAGE_SLOT - NUM_BYTES_ADDRESS..NUM_BYTES_STORAGE_SLOT],
    )
}

/// Read an address stored in the given slot of a contract
///
/// Used for the EIP-1967 admin & implementation slots of a proxy, which is
/// the recommended way to get these addresses:
/// https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/ERC1967/ERC1967Utils.sol#L104-L106
pub async fn read_address_slot(
    client: &impl ChainClient,
    contract: Address,
    slot: &str,
) -> Result<Address, ScriptError> {
    let value = client.storage_at(contract, storage_slot(slot)?).await?;
    Ok(slot_to_address(value))
}

/// The deployments key of the proxy of `contract`
pub fn proxy_key(contract: &str) -> String {
    format!("{contract}{PROXY_KEY_SUFFIX}")
}

/// The deployments key of the proxy admin of `contract`
pub fn proxy_admin_key(contract: &str) -> String {
    format!("{contract}{PROXY_ADMIN_KEY_SUFFIX}")
}

/// The deployments key of the implementation of `contract`
pub fn implementation_key(contract: &str) -> String {
    format!("{contract}{IMPLEMENTATION_KEY_SUFFIX}")
}
