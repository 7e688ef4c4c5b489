use crate::amount::to_decimal_string;
use crate::error::Error;
use crate::rpc::RpcClient;
use crate::tokens::{TokenInfo, balanceOfCall};
use alloy_primitives::Address;
use tracing::warn;

const NATIVE_SYMBOL: &str = "ETH";
const NATIVE_DECIMALS: u8 = 18;

/// One row of a balance report. A failed query keeps its row with the error
/// text instead of aborting the remaining queries.
#[derive(Debug, Clone)]
pub struct BalanceRow {
    pub symbol: String,
    pub amount: Option<String>,
    pub error: Option<String>,
}

impl BalanceRow {
    fn ok(symbol: &str, amount: String) -> Self {
        BalanceRow { symbol: symbol.to_string(), amount: Some(amount), error: None }
    }

    fn failed(symbol: &str, error: Error) -> Self {
        BalanceRow { symbol: symbol.to_string(), amount: None, error: Some(error.to_string()) }
    }
}

/// Native balance followed by one row per registered token, in registry
/// order. Queries run sequentially; each one is independent.
pub async fn get_balances(rpc: &RpcClient, address: Address, tokens: &[TokenInfo]) -> Vec<BalanceRow> {
    let mut rows = Vec::with_capacity(tokens.len() + 1);

    match rpc.get_native_balance(address).await {
        Ok(balance) => rows.push(BalanceRow::ok(
            NATIVE_SYMBOL,
            to_decimal_string(balance, NATIVE_DECIMALS),
        )),
        Err(e) => {
            let err = Error::query(format!("{NATIVE_SYMBOL} balance"), e);
            warn!("{err}");
            rows.push(BalanceRow::failed(NATIVE_SYMBOL, err));
        }
    }

    for token in tokens {
        let call = balanceOfCall { account: address };
        match rpc.call(token.address, call).await {
            Ok(balance) => rows.push(BalanceRow::ok(
                token.symbol,
                to_decimal_string(balance, token.decimals),
            )),
            Err(e) => {
                let err = Error::query(format!("{} balance", token.symbol), e);
                warn!("{err}");
                rows.push(BalanceRow::failed(token.symbol, err));
            }
        }
    }

    rows
}
