use crate::amount::to_base_units;
use crate::error::{Error, Result};
use crate::tokens::{TokenInfo, transferCall};
use alloy::sol_types::SolCall;
use alloy_primitives::{Address, Bytes, U256};
use std::str::FromStr;

/// One contract call ready for submission through the smart account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCall {
    pub target: Address,
    pub value: U256,
    pub data: Bytes,
}

/// A single (recipient, amount) pair as entered on the command line.
#[derive(Debug, Clone)]
pub struct TransferIntent {
    pub recipient: String,
    pub amount: String,
}

/// Parses the `recipient:amount` form used by batch-send-token.
pub fn parse_intent(arg: &str) -> Result<TransferIntent> {
    match arg.split_once(':') {
        Some((recipient, amount)) if !recipient.is_empty() && !amount.is_empty() => {
            Ok(TransferIntent {
                recipient: recipient.to_string(),
                amount: amount.to_string(),
            })
        }
        _ => Err(Error::Usage(format!(
            "invalid transfer \"{arg}\", expected <recipient>:<amount>"
        ))),
    }
}

/// Encodes one ERC-20 `transfer(address,uint256)` call against the token
/// contract. The recipient must be a well-formed 20-byte hex address.
pub fn build_transfer_call(token: &TokenInfo, recipient: &str, amount: &str) -> Result<EncodedCall> {
    let to = Address::from_str(recipient).map_err(|_| Error::InvalidAddress(recipient.to_string()))?;
    let units = to_base_units(amount, token.decimals)?;

    let data = transferCall { to, amount: units }.abi_encode();

    Ok(EncodedCall {
        target: token.address,
        value: U256::ZERO,
        data: data.into(),
    })
}

/// Builds the ordered call list for one atomic multi-recipient transfer.
/// Every entry is validated before anything is returned, so a batch with any
/// invalid entry produces no calls at all.
pub fn build_batch(token: &TokenInfo, intents: &[TransferIntent]) -> Result<Vec<EncodedCall>> {
    if intents.is_empty() {
        return Err(Error::EmptyBatch);
    }
    intents
        .iter()
        .map(|intent| build_transfer_call(token, &intent.recipient, &intent.amount))
        .collect()
}
