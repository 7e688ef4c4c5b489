use basesend::account::AccountSession;
use basesend::calls::{TransferIntent, build_batch, parse_intent};
use basesend::config::Config;
use basesend::display::explorer_tx_url;
use basesend::error::Result;
use basesend::tokens;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "batch-send-token")]
#[command(about = "Send a token to multiple recipients in one transaction", long_about = None)]
struct Cli {
    /// Token symbol, e.g. USDC
    token: String,

    /// Transfers as <recipient>:<amount>
    #[arg(required = true)]
    transfers: Vec<String>,
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

    let intents: Vec<TransferIntent> = cli
        .transfers
        .iter()
        .map(|arg| parse_intent(arg))
        .collect::<Result<_>>()?;

    // every entry is validated here, before any network interaction
    let batch = build_batch(token, &intents)?;

    let session = AccountSession::connect(&config).await?;
    info!("From: {}", session.address());
    for intent in &intents {
        info!("  -> {}: {} {}", intent.recipient, intent.amount, token.symbol);
    }
    info!("Sending {} transfers in one transaction", batch.len());

    let hash = session.submit(&batch).await?;

    println!("Batch transaction sent: {hash}");
    println!("View: {}", explorer_tx_url(&hash));

    Ok(())
}
