use basesend::account::AccountSession;
use basesend::calls::build_transfer_call;
use basesend::config::Config;
use basesend::display::explorer_tx_url;
use basesend::error::Result;
use basesend::tokens;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "send-token")]
#[command(about = "Send an ERC-20 token from a smart account on Base", long_about = None)]
struct Cli {
    /// Token symbol, e.g. USDC
    token: String,

    /// Recipient address
    recipient: String,

    /// Amount in human units, e.g. 0.1
    amount: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let token = tokens::lookup(&cli.token)?;
    let call = build_transfer_call(token, &cli.recipient, &cli.amount)?;

    let session = AccountSession::connect(&config).await?;
    info!("From: {}", session.address());
    info!("To: {}", cli.recipient);
    info!("Amount: {} {}", cli.amount, token.symbol);

    let hash = session.submit(std::slice::from_ref(&call)).await?;

    println!("Transaction sent: {hash}");
    println!("View: {}", explorer_tx_url(&hash));

    Ok(())
}
