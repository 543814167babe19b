//! Implementations of the various deploy scripts

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use tracing::info;

use crate::{
    airnode::{
        airnode_rrp_address, sponsor_wallet_command, ENDPOINT_ID_UINT256,
        ENDPOINT_ID_UINT256_ARRAY, QRNG_AIRNODE,
    },
    artifacts::{load_artifact, ContractArtifact},
    cli::{
        CreatePoolArgs, DeployArgs, DeployProxyArgs, SetRequestParametersArgs, SponsorHintArgs,
        UpgradeArgs,
    },
    client::ChainClient,
    constants::{DEFAULT_INITIALIZER, PROXY_ADMIN_STORAGE_SLOT, PROXY_IMPLEMENTATION_STORAGE_SLOT},
    deployments::{resolve_address, write_deployment},
    errors::ScriptError,
    pool::PoolSettings,
    solidity::{IFourDucks, IProxyAdmin, ISnatch, IERC20},
    types::{NetworkInfo, ProxyDeployment, ScriptContext},
    utils::{
        implementation_key, parse_bytes32, parse_hex_calldata, proxy_admin_key, proxy_key,
        read_address_slot,
    },
};

/// Fetch and log the chain ID and gas price of the network
pub async fn network_info(client: &impl ChainClient) -> Result<NetworkInfo, ScriptError> {
    let chain_id = client.chain_id().await?;
    info!("Chain ID: {}", chain_id);
    let gas_price = client.gas_price().await?;
    info!("Gas price: {}", gas_price);

    Ok(NetworkInfo {
        chain_id,
        gas_price,
    })
}

/// Log the account transactions are sent from
pub fn accounts(client: &impl ChainClient) -> Address {
    let sender = client.sender();
    info!("{:#x}", sender);
    sender
}

/// Ensure the constructor of `artifact` takes `given` arguments
fn check_constructor_arity(artifact: &ContractArtifact, given: usize) -> Result<(), ScriptError> {
    let expected = artifact.constructor_arity();
    if expected != given {
        return Err(ScriptError::ContractDeployment(format!(
            "{} constructor takes {} argument(s), {} given",
            artifact.name, expected, given
        )));
    }
    Ok(())
}

/// Load the artifact named `contract`, if any, and check it exposes the
/// function about to be called
fn check_target_function<C: SolCall>(
    contract: Option<&str>,
    ctx: &ScriptContext,
) -> Result<(), ScriptError> {
    if let Some(name) = contract {
        load_artifact(&ctx.artifacts_dir, name)?.ensure_function(C::SELECTOR, C::SIGNATURE)?;
    }
    Ok(())
}

/// Deploy a contract directly, without a proxy
pub async fn deploy(
    args: &DeployArgs,
    ctx: &ScriptContext,
    client: &impl ChainClient,
) -> Result<Address, ScriptError> {
    let network = network_info(client).await?;
    let artifact = load_artifact(&ctx.artifacts_dir, &args.contract)?;

    let constructor_args = if args.airnode_rrp {
        let airnode_rrp = airnode_rrp_address(network.chain_id)?;
        info!("AirnodeRrpV0: {:#x}", airnode_rrp);
        check_constructor_arity(&artifact, 1)?;
        (airnode_rrp,).abi_encode_params()
    } else {
        check_constructor_arity(&artifact, 0)?;
        Vec::new()
    };

    info!("Deploying {}...", artifact.name);
    let address = client
        .deploy(artifact.deploy_code(&constructor_args))
        .await?;
    info!("{} deployed to: {:#x}", artifact.name, address);

    let key = args.key.as_deref().unwrap_or(&args.contract);
    write_deployment(key, address, &ctx.deployments_path)?;

    if args.airnode_rrp {
        info!("You need to get sponsor-address. The code is:");
        info!("{}", sponsor_wallet_command(address));
    }

    Ok(address)
}

/// Deploy an upgradeable contract behind a TransparentUpgradeableProxy.
///
/// The implementation is deployed first, then the proxy, which is initialized
/// in its constructor and itself deploys a `ProxyAdmin` owned by `owner`.
///
/// Calls made directly to the proxy are forwarded to the implementation.
/// Upgrade calls can only be made to the proxy through the `ProxyAdmin`.
pub async fn deploy_proxy(
    args: &DeployProxyArgs,
    ctx: &ScriptContext,
    client: &impl ChainClient,
) -> Result<ProxyDeployment, ScriptError> {
    network_info(client).await?;

    let implementation_artifact = load_artifact(&ctx.artifacts_dir, &args.contract)?;
    let proxy_artifact = load_artifact(&ctx.artifacts_dir, &args.proxy_artifact)?;
    check_constructor_arity(&implementation_artifact, 0)?;
    check_constructor_arity(&proxy_artifact, 3)?;

    let init_data = match &args.init_calldata {
        Some(calldata) => parse_hex_calldata(calldata)?,
        None => implementation_artifact
            .no_arg_calldata(args.initializer.as_deref().unwrap_or(DEFAULT_INITIALIZER))?,
    };
    let owner = match &args.owner {
        Some(owner) => resolve_address(owner, &ctx.deployments_path)?,
        None => client.sender(),
    };

    info!("Deploying {}...", args.contract);
    let implementation = client
        .deploy(implementation_artifact.deploy_code(&[]))
        .await?;
    info!(
        "{} implementation deployed to: {:#x}",
        args.contract, implementation
    );

    let proxy_args = (implementation, owner, init_data).abi_encode_params();
    let proxy = client.deploy(proxy_artifact.deploy_code(&proxy_args)).await?;

    info!("{} proxy deployed to: {:#x}", args.contract, proxy);
    write_deployment(&proxy_key(&args.contract), proxy, &ctx.deployments_path)?;
    write_deployment(
        &implementation_key(&args.contract),
        implementation,
        &ctx.deployments_path,
    )?;

    let proxy_admin = read_address_slot(client, proxy, PROXY_ADMIN_STORAGE_SLOT).await?;
    if proxy_admin == Address::ZERO {
        return Err(ScriptError::ContractDeployment(format!(
            "proxy {:#x} reports no admin in its EIP-1967 slot, is {} a transparent proxy?",
            proxy, args.proxy_artifact
        )));
    }
    info!("{} proxy admin deployed to: {:#x}", args.contract, proxy_admin);
    write_deployment(
        &proxy_admin_key(&args.contract),
        proxy_admin,
        &ctx.deployments_path,
    )?;

    Ok(ProxyDeployment {
        proxy,
        proxy_admin,
        implementation,
    })
}

/// Upgrade a proxy to a freshly deployed implementation of `contract`
pub async fn upgrade(
    args: &UpgradeArgs,
    ctx: &ScriptContext,
    client: &impl ChainClient,
) -> Result<Address, ScriptError> {
    network_info(client).await?;

    let proxy_ref = args
        .proxy
        .clone()
        .unwrap_or_else(|| proxy_key(&args.contract));
    let proxy = resolve_address(&proxy_ref, &ctx.deployments_path)?;

    let artifact = load_artifact(&ctx.artifacts_dir, &args.contract)?;
    check_constructor_arity(&artifact, 0)?;
    let data = match &args.calldata {
        Some(calldata) => parse_hex_calldata(calldata)?,
        None => Bytes::new(),
    };

    let proxy_admin = read_address_slot(client, proxy, PROXY_ADMIN_STORAGE_SLOT).await?;
    if proxy_admin == Address::ZERO {
        return Err(ScriptError::ContractInteraction(format!(
            "{:#x} is not a transparent proxy, its admin slot is empty",
            proxy
        )));
    }

    info!("Upgrade to {}...", args.contract);
    let implementation = client.deploy(artifact.deploy_code(&[])).await?;
    info!(
        "{} implementation deployed to: {:#x}",
        args.contract, implementation
    );

    let calldata = if args.legacy_admin && data.is_empty() {
        IProxyAdmin::upgradeCall {
            proxy,
            implementation,
        }
        .abi_encode()
    } else {
        IProxyAdmin::upgradeAndCallCall {
            proxy,
            implementation,
            data,
        }
        .abi_encode()
    };
    client.send(proxy_admin, calldata.into()).await?;

    let current = read_address_slot(client, proxy, PROXY_IMPLEMENTATION_STORAGE_SLOT).await?;
    if current != implementation {
        return Err(ScriptError::ContractInteraction(format!(
            "proxy {:#x} points to {:#x} instead of {:#x} after the upgrade",
            proxy, current, implementation
        )));
    }

    info!("{} proxy deployed to: {:#x}", args.contract, proxy);
    write_deployment(
        &implementation_key(&args.contract),
        implementation,
        &ctx.deployments_path,
    )?;

    Ok(implementation)
}

/// Create a prize pool on a Snatch contract and approve it to spend the
/// deployer's payment tokens
pub async fn create_pool(
    args: &CreatePoolArgs,
    ctx: &ScriptContext,
    client: &impl ChainClient,
) -> Result<(), ScriptError> {
    let snatch = resolve_address(&args.snatch, &ctx.deployments_path)?;
    let settings = match &args.config {
        Some(path) => PoolSettings::from_file(path)?,
        None => PoolSettings::default(),
    };
    let config = settings.to_pool_config(&ctx.deployments_path)?;
    check_target_function::<ISnatch::createPoolCall>(args.contract.as_deref(), ctx)?;

    let payment_token = config.paymentToken;
    let calldata = ISnatch::createPoolCall { config }.abi_encode();
    client.send(snatch, calldata.into()).await?;
    info!("createPool done");

    if !args.skip_approve {
        let calldata = IERC20::approveCall {
            spender: snatch,
            value: U256::MAX,
        }
        .abi_encode();
        client.send(payment_token, calldata.into()).await?;
        info!("Approved {:#x} to spend {:#x}", snatch, payment_token);
    }

    Ok(())
}

/// Point a randomness-consuming contract at the QRNG airnode and its sponsor wallet
pub async fn set_request_parameters(
    args: &SetRequestParametersArgs,
    ctx: &ScriptContext,
    client: &impl ChainClient,
) -> Result<(), ScriptError> {
    let target = resolve_address(&args.target, &ctx.deployments_path)?;
    let airnode = match &args.airnode {
        Some(airnode) => resolve_address(airnode, &ctx.deployments_path)?,
        None => QRNG_AIRNODE,
    };
    let sponsor_wallet = resolve_address(&args.sponsor_wallet, &ctx.deployments_path)?;
    let endpoint_id_uint256 = match &args.endpoint_id_uint256 {
        Some(id) => parse_bytes32(id)?,
        None => ENDPOINT_ID_UINT256,
    };

    let calldata = if args.single_endpoint {
        check_target_function::<IFourDucks::setRequestParametersCall>(
            args.contract.as_deref(),
            ctx,
        )?;
        IFourDucks::setRequestParametersCall {
            airnode,
            endpointIdUint256: endpoint_id_uint256,
            sponsorWallet: sponsor_wallet,
        }
        .abi_encode()
    } else {
        check_target_function::<ISnatch::setRequestParametersCall>(
            args.contract.as_deref(),
            ctx,
        )?;
        let endpoint_id_uint256_array = match &args.endpoint_id_uint256_array {
            Some(id) => parse_bytes32(id)?,
            None => ENDPOINT_ID_UINT256_ARRAY,
        };
        ISnatch::setRequestParametersCall {
            airnode,
            endpointIdUint256: endpoint_id_uint256,
            endpointIdUint256Array: endpoint_id_uint256_array,
            sponsorWallet: sponsor_wallet,
        }
        .abi_encode()
    };

    client.send(target, calldata.into()).await?;
    info!("setRequestParameters done");

    Ok(())
}

/// Print the command deriving the sponsor wallet of a contract
pub fn sponsor_hint(args: &SponsorHintArgs, ctx: &ScriptContext) -> Result<String, ScriptError> {
    let sponsor = resolve_address(&args.sponsor, &ctx.deployments_path)?;
    let command = sponsor_wallet_command(sponsor);
    info!("{}", command);
    Ok(command)
}
