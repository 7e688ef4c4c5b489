use alloy_primitives::Address;
use basesend::balances::get_balances;
use basesend::config;
use basesend::display::{OutputFormat, format_balances};
use basesend::error::{Error, Result};
use basesend::rpc::RpcClient;
use basesend::tokens::TOKENS;
use clap::Parser;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "check-balance")]
#[command(about = "Check ETH and token balances of an address on Base", long_about = None)]
struct Cli {
    /// Address to query
    address: String,

    #[arg(short, long, default_value = "table")]
    format: String,
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
    let address = Address::from_str(&cli.address)
        .map_err(|_| Error::InvalidAddress(cli.address.clone()))?;
    let format = OutputFormat::from(cli.format.as_str());

    let rpc = RpcClient::connect(&config::rpc_endpoint_from_env())?;
    let rows = get_balances(&rpc, address, &TOKENS).await;

    println!("{}", format_balances(&rows, &format));

    // individual failures are informational, but a report with no data at
    // all means the endpoint is down
    if rows.iter().all(|row| row.error.is_some()) {
        return Err(Error::Query {
            what: "balances".to_string(),
            reason: "every query failed".to_string(),
        });
    }

    Ok(())
}
