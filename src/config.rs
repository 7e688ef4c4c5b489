use crate::error::{Error, Result};

pub const CHAIN_ID: u64 = 8453;
pub const DEFAULT_RPC_ENDPOINT: &str = "https://mainnet.base.org";
pub const EXPLORER_TX_URL: &str = "https://basescan.org/tx";

#[derive(Debug, Clone)]
pub struct Config {
    pub private_key: String,
    pub pimlico_api_key: String,
    pub rpc_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let private_key = std::env::var("PRIVATE_KEY")
            .map_err(|_| Error::Configuration("PRIVATE_KEY must be set in .env".to_string()))?;

        let pimlico_api_key = std::env::var("PIMLICO_API_KEY")
            .map_err(|_| Error::Configuration("PIMLICO_API_KEY must be set in .env".to_string()))?;

        Ok(Config {
            private_key,
            pimlico_api_key,
            rpc_endpoint: rpc_endpoint_from_env(),
        })
    }

    pub fn bundler_url(&self) -> String {
        format!(
            "https://api.pimlico.io/v2/{CHAIN_ID}/rpc?apikey={}",
            self.pimlico_api_key
        )
    }
}

/// RPC endpoint for the read-only executables, which need no secrets.
pub fn rpc_endpoint_from_env() -> String {
    dotenv::dotenv().ok();
    std::env::var("RPC_ENDPOINT").unwrap_or_else(|_| DEFAULT_RPC_ENDPOINT.to_string())
}
