//! Constants of the API3 QRNG integration used by the randomness-consuming contracts
//!
//! See https://docs.api3.org/qrng/reference/providers.html#airnode

use alloy_primitives::{address, b256, Address, B256};

use crate::errors::ScriptError;

/// The AirnodeRrpV0 deployment on most chains
const AIRNODE_RRP_V0: Address = address!("a0AD79D995DdeeB18a14eAef56A549A04e3Aa1Bd");
/// The AirnodeRrpV0 deployment on Arbitrum
const AIRNODE_RRP_V0_ARBITRUM: Address = address!("b015ACeEdD478fc497A798Ab45fcED8BdEd08924");
/// The AirnodeRrpV0 deployment on Avalanche and Metis
const AIRNODE_RRP_V0_AVALANCHE: Address = address!("C02Ea0f403d5f3D45a4F1d0d817e7A2601346c9E");

/// The address of the QRNG airnode
pub const QRNG_AIRNODE: Address = address!("9d3C147cA16DB954873A498e0af5852AB39139f2");

/// The extended public key of the QRNG airnode, used to derive sponsor wallets
pub const QRNG_AIRNODE_XPUB: &str = "xpub6DXSDTZBd4aPVXnv6Q3SmnGUweFv6j24SK77W4qrSFuhGgi666awUiXakjXruUSCDQhhctVG7AQt67gMdaRAsDnDXv23bBRKsMWvRzo6kbf";

/// The endpoint ID for requesting a single `uint256`
pub const ENDPOINT_ID_UINT256: B256 =
    b256!("fb6d017bb87991b7495f563db3c8cf59ff87b09781947bb1e417006ad7f55a78");

/// The endpoint ID for requesting a `uint256[]`
pub const ENDPOINT_ID_UINT256_ARRAY: B256 =
    b256!("27cc2713e7f968e4e86ed274a051a5c8aaee9cca66946f23af6f29ecea9704c3");

/// The address of the AirnodeRrpV0 contract on the given chain
pub fn airnode_rrp_address(chain_id: u64) -> Result<Address, ScriptError> {
    match chain_id {
        // Ethereum, Goerli, Optimism, RSK, BSC, Gnosis, Polygon, Fantom,
        // Moonbeam, Moonriver, Milkomeda
        1 | 5 | 10 | 30 | 56 | 100 | 137 | 250 | 1284 | 1285 | 2001 => Ok(AIRNODE_RRP_V0),
        42161 => Ok(AIRNODE_RRP_V0_ARBITRUM),
        1088 | 43114 => Ok(AIRNODE_RRP_V0_AVALANCHE),
        _ => Err(ScriptError::UnsupportedChain(chain_id)),
    }
}

/// The `airnode-admin` invocation deriving the sponsor wallet of `sponsor`
///
/// The sponsor wallet must be funded and passed to `setRequestParameters`
/// before the sponsor contract can request random numbers.
pub fn sponsor_wallet_command(sponsor: Address) -> String {
    format!(
        "npx @api3/airnode-admin derive-sponsor-wallet-address \
         --airnode-xpub {QRNG_AIRNODE_XPUB} \
         --airnode-address {QRNG_AIRNODE} \
         --sponsor-address {sponsor}"
    )
}
