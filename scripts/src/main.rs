use clap::Parser;
use scripts::{
    cli::Cli,
    client::{setup_client, setup_read_only_client},
    errors::ScriptError,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .init();

    let ctx = cli.context();
    if cli.command.requires_signer() {
        let client = setup_client(&cli.key_source()?, &cli.rpc_url).await?;
        cli.command.run(&client, &ctx).await
    } else {
        let client = setup_read_only_client(&cli.rpc_url)?;
        cli.command.run(&client, &ctx).await
    }
}
