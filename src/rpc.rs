use crate::error::{Error, Result, RpcError};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionInput, TransactionRequest};
use alloy::sol_types::SolCall;
use alloy_primitives::{Address, Bytes, TxKind, U256};
use std::time::Duration;
use tokio::time::timeout;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only JSON-RPC client. Every request runs under an explicit timeout
/// and is attempted exactly once.
#[derive(Clone)]
pub struct RpcClient {
    provider: DynProvider,
}

impl RpcClient {
    pub fn connect(url: &str) -> Result<Self> {
        let parsed = url
            .parse()
            .map_err(|_| Error::Configuration(format!("invalid RPC URL: {url}")))?;
        let provider = ProviderBuilder::new().connect_http(parsed).erased();
        Ok(RpcClient { provider })
    }

    pub async fn get_native_balance(&self, address: Address) -> std::result::Result<U256, RpcError> {
        match timeout(REQUEST_TIMEOUT, self.provider.get_balance(address)).await {
            Ok(Ok(balance)) => Ok(balance),
            Ok(Err(e)) => Err(RpcError::Transport(e.to_string())),
            Err(_) => Err(RpcError::Timeout(REQUEST_TIMEOUT.as_secs())),
        }
    }

    pub async fn get_code(&self, address: Address) -> std::result::Result<Bytes, RpcError> {
        match timeout(REQUEST_TIMEOUT, self.provider.get_code_at(address)).await {
            Ok(Ok(code)) => Ok(code),
            Ok(Err(e)) => Err(RpcError::Transport(e.to_string())),
            Err(_) => Err(RpcError::Timeout(REQUEST_TIMEOUT.as_secs())),
        }
    }

    /// `eth_call` against a contract, decoding the return value with the
    /// call's own ABI.
    pub async fn call<C: SolCall>(
        &self,
        to: Address,
        call: C,
    ) -> std::result::Result<C::Return, RpcError> {
        let tx = TransactionRequest {
            to: Some(TxKind::Call(to)),
            input: TransactionInput::new(Bytes::from(call.abi_encode())),
            ..Default::default()
        };

        match timeout(REQUEST_TIMEOUT, self.provider.call(tx)).await {
            Ok(Ok(raw)) => C::abi_decode_returns(&raw)
                .map_err(|e| RpcError::Transport(format!("failed to decode return data: {e}"))),
            Ok(Err(e)) => Err(RpcError::Transport(e.to_string())),
            Err(_) => Err(RpcError::Timeout(REQUEST_TIMEOUT.as_secs())),
        }
    }
}
