use alloy::signers::local::PrivateKeySigner;
use basesend::account::counterfactual_address;
use basesend::config::{self, CHAIN_ID};
use basesend::error::{Error, Result};
use basesend::rpc::RpcClient;
use clap::Parser;

#[derive(Parser)]
#[command(name = "create-account")]
#[command(about = "Derive the smart account controlled by a private key", long_about = None)]
struct Cli {
    /// Hex-encoded private key of the account owner
    private_key: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let signer: PrivateKeySigner = cli
        .private_key
        .parse()
        .map_err(|_| Error::Configuration("invalid private key".to_string()))?;

    let rpc = RpcClient::connect(&config::rpc_endpoint_from_env())?;
    let account = counterfactual_address(&rpc, signer.address()).await?;

    println!("Signer (EOA): {}", signer.address());
    println!("Smart account: {account}");
    println!("Chain: Base ({CHAIN_ID})");
    println!("\nFund the smart account on Base to start transacting.");

    Ok(())
}
