use crate::error::{Error, Result, RpcError};
use crate::rpc::REQUEST_TIMEOUT;
use crate::userop::{GasEstimate, GasFee, GasPriceTiers, UserOperation};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy_primitives::{Address, B256};
use tokio::time::timeout;

/// JSON-RPC client for the bundler endpoint. Same transport rules as the
/// read client: one attempt per request, explicit timeout.
#[derive(Clone)]
pub struct BundlerClient {
    provider: DynProvider,
    entry_point: Address,
}

impl BundlerClient {
    pub fn connect(url: &str, entry_point: Address) -> Result<Self> {
        let parsed = url
            .parse()
            .map_err(|_| Error::Configuration(format!("invalid bundler URL: {url}")))?;
        let provider = ProviderBuilder::new().connect_http(parsed).erased();
        Ok(BundlerClient { provider, entry_point })
    }

    /// Current fee tiers from `pimlico_getUserOperationGasPrice`; the `fast`
    /// tier is what submission uses.
    pub async fn gas_price(&self) -> std::result::Result<GasFee, RpcError> {
        let request = self
            .provider
            .raw_request::<[(); 0], GasPriceTiers>("pimlico_getUserOperationGasPrice".into(), []);
        match timeout(REQUEST_TIMEOUT, request).await {
            Ok(Ok(tiers)) => Ok(tiers.fast),
            Ok(Err(e)) => Err(RpcError::Transport(e.to_string())),
            Err(_) => Err(RpcError::Timeout(REQUEST_TIMEOUT.as_secs())),
        }
    }

    pub async fn estimate_gas(
        &self,
        op: &UserOperation,
    ) -> std::result::Result<GasEstimate, RpcError> {
        let request = self.provider.raw_request::<_, GasEstimate>(
            "eth_estimateUserOperationGas".into(),
            (op.clone(), self.entry_point),
        );
        match timeout(REQUEST_TIMEOUT, request).await {
            Ok(Ok(estimate)) => Ok(estimate),
            Ok(Err(e)) => Err(RpcError::Transport(e.to_string())),
            Err(_) => Err(RpcError::Timeout(REQUEST_TIMEOUT.as_secs())),
        }
    }

    /// Submits the signed operation and returns its opaque hash.
    pub async fn send_user_operation(
        &self,
        op: &UserOperation,
    ) -> std::result::Result<B256, RpcError> {
        let request = self
            .provider
            .raw_request::<_, B256>("eth_sendUserOperation".into(), (op.clone(), self.entry_point));
        match timeout(REQUEST_TIMEOUT, request).await {
            Ok(Ok(hash)) => Ok(hash),
            Ok(Err(e)) => Err(RpcError::Transport(e.to_string())),
            Err(_) => Err(RpcError::Timeout(REQUEST_TIMEOUT.as_secs())),
        }
    }
}
