//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::Level;

use crate::{
    client::{ChainClient, KeySource},
    commands::{
        accounts, create_pool, deploy, deploy_proxy, network_info, set_request_parameters,
        sponsor_hint, upgrade,
    },
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, DEFAULT_RPC_URL, MNEMONIC_ENV_VAR,
        PKEY_ENV_VAR, PROXY_ARTIFACT_NAME, RPC_URL_ENV_VAR,
    },
    errors::ScriptError,
    types::ScriptContext,
};

/// Scripts deploying, upgrading and configuring the game contracts
#[derive(Parser)]
#[command(name = "contract-scripts", version)]
pub struct Cli {
    /// Network RPC URL
    #[arg(short, long, env = RPC_URL_ENV_VAR, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Private key of the deployer
    #[arg(long = "pkey", env = PKEY_ENV_VAR, hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Mnemonic the deployer's key is derived from, ignored when a private key is set
    #[arg(long, env = MNEMONIC_ENV_VAR, hide_env_values = true)]
    pub mnemonic: Option<String>,

    /// Index of the account derived from the mnemonic
    #[arg(long, default_value_t = 0)]
    pub mnemonic_index: u32,

    /// Path to the JSON file deployed addresses are recorded in
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments: PathBuf,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub verbosity: Level,

    /// The script to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The source of the deployer's signing key
    pub fn key_source(&self) -> Result<KeySource, ScriptError> {
        match (&self.priv_key, &self.mnemonic) {
            (Some(priv_key), _) => Ok(KeySource::PrivateKey(priv_key.clone())),
            (None, Some(phrase)) => Ok(KeySource::Mnemonic {
                phrase: phrase.clone(),
                index: self.mnemonic_index,
            }),
            (None, None) => Err(ScriptError::Config(format!(
                "a signing key is required, set --pkey ({PKEY_ENV_VAR}) or --mnemonic ({MNEMONIC_ENV_VAR})"
            ))),
        }
    }

    /// The paths shared by every command
    pub fn context(&self) -> ScriptContext {
        ScriptContext {
            deployments_path: self.deployments.clone(),
            artifacts_dir: self.artifacts.clone(),
        }
    }
}

/// The available scripts
#[derive(Subcommand)]
pub enum Command {
    /// Print the chain ID and gas price of the network
    Network,
    /// Print the deployer's address
    Accounts,
    /// Deploy a contract without a proxy
    Deploy(DeployArgs),
    /// Deploy an upgradeable contract behind a proxy
    DeployProxy(DeployProxyArgs),
    /// Upgrade a proxy to a new implementation of a contract
    Upgrade(UpgradeArgs),
    /// Create a prize pool on a Snatch contract
    CreatePool(CreatePoolArgs),
    /// Set the QRNG request parameters of a randomness-consuming contract
    SetRequestParameters(SetRequestParametersArgs),
    /// Print the command deriving the sponsor wallet of a contract
    SponsorHint(SponsorHintArgs),
}

impl Command {
    /// Whether the command sends transactions, or needs the deployer's address
    pub fn requires_signer(&self) -> bool {
        !matches!(self, Command::Network | Command::SponsorHint(_))
    }

    /// Run the script against the given client
    pub async fn run(
        self,
        client: &impl ChainClient,
        ctx: &ScriptContext,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Network => network_info(client).await.map(|_| ()),
            Command::Accounts => {
                accounts(client);
                Ok(())
            }
            Command::Deploy(args) => deploy(&args, ctx, client).await.map(|_| ()),
            Command::DeployProxy(args) => deploy_proxy(&args, ctx, client).await.map(|_| ()),
            Command::Upgrade(args) => upgrade(&args, ctx, client).await.map(|_| ()),
            Command::CreatePool(args) => create_pool(&args, ctx, client).await,
            Command::SetRequestParameters(args) => {
                set_request_parameters(&args, ctx, client).await
            }
            Command::SponsorHint(args) => sponsor_hint(&args, ctx).map(|_| ()),
        }
    }
}

/// Deploy a contract without a proxy
#[derive(Args)]
pub struct DeployArgs {
    /// Name of the contract artifact
    #[arg(short, long)]
    pub contract: String,

    /// Pass the AirnodeRrpV0 address of the network to the constructor
    #[arg(long)]
    pub airnode_rrp: bool,

    /// Key the deployed address is recorded under, defaults to the contract name
    #[arg(short, long)]
    pub key: Option<String>,
}

/// Deploy an upgradeable contract behind a proxy.
///
/// Concretely, this is a [`TransparentUpgradeableProxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#transparent_proxy),
/// which itself deploys a `ProxyAdmin` contract.
#[derive(Args)]
pub struct DeployProxyArgs {
    /// Name of the implementation contract artifact
    #[arg(short, long)]
    pub contract: String,

    /// Name of the argument-less function initializing the proxy,
    /// `initialize` by default
    #[arg(short, long, conflicts_with = "init_calldata")]
    pub initializer: Option<String>,

    /// Raw calldata, in hex form, with which to initialize the proxy
    #[arg(long)]
    pub init_calldata: Option<String>,

    /// Address (or deployments key) of the owner of the proxy admin,
    /// the deployer by default
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Name of the proxy contract artifact
    #[arg(long, default_value = PROXY_ARTIFACT_NAME)]
    pub proxy_artifact: String,
}

/// Upgrade a proxy to a new implementation of a contract
#[derive(Args)]
pub struct UpgradeArgs {
    /// Name of the new implementation contract artifact
    #[arg(short, long)]
    pub contract: String,

    /// Address (or deployments key) of the proxy contract,
    /// `<contract>Proxy` by default
    #[arg(short, long)]
    pub proxy: Option<String>,

    /// Optional calldata, in hex form, with which to
    /// call the implementation contract when upgrading
    #[arg(long)]
    pub calldata: Option<String>,

    /// The proxy admin predates OpenZeppelin 5.x and exposes `upgrade`
    #[arg(long)]
    pub legacy_admin: bool,
}

/// Create a prize pool on a Snatch contract
#[derive(Args)]
pub struct CreatePoolArgs {
    /// Address (or deployments key) of the Snatch contract
    #[arg(short, long, default_value = "Snatch")]
    pub snatch: String,

    /// TOML file describing the pool, the first pool ever created by default
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not approve the Snatch contract to spend the payment token
    #[arg(long)]
    pub skip_approve: bool,

    /// Name of the Snatch artifact to check the call against
    #[arg(short, long)]
    pub contract: Option<String>,
}

/// Set the QRNG request parameters of a randomness-consuming contract
#[derive(Args)]
pub struct SetRequestParametersArgs {
    /// Address (or deployments key) of the contract
    #[arg(short, long)]
    pub target: String,

    /// Address of the airnode, the API3 QRNG airnode by default
    #[arg(long)]
    pub airnode: Option<String>,

    /// Endpoint ID of single random number requests
    #[arg(long)]
    pub endpoint_id_uint256: Option<String>,

    /// Endpoint ID of random number array requests
    #[arg(long, conflicts_with = "single_endpoint")]
    pub endpoint_id_uint256_array: Option<String>,

    /// Address (or deployments key) of the sponsor wallet
    #[arg(short, long)]
    pub sponsor_wallet: String,

    /// The contract only requests single random numbers
    #[arg(long)]
    pub single_endpoint: bool,

    /// Name of the contract artifact to check the call against
    #[arg(short, long)]
    pub contract: Option<String>,
}

/// Print the command deriving the sponsor wallet of a contract
#[derive(Args)]
pub struct SponsorHintArgs {
    /// Address (or deployments key) of the sponsor contract
    #[arg(short, long)]
    pub sponsor: String,
}
