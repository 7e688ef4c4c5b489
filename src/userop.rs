//! ERC-4337 v0.6 user operation, serialized in the camelCase hex form the
//! bundler's JSON-RPC API expects.

use alloy::sol_types::SolValue;
use alloy_primitives::{Address, B256, Bytes, U256, keccak256};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperation {
    pub sender: Address,
    pub nonce: U256,
    pub init_code: Bytes,
    pub call_data: Bytes,
    pub call_gas_limit: U256,
    pub verification_gas_limit: U256,
    pub pre_verification_gas: U256,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
    pub paymaster_and_data: Bytes,
    pub signature: Bytes,
}

impl UserOperation {
    /// The hash the account owner signs: keccak256 of the packed operation
    /// (dynamic fields replaced by their keccak256) bound to the EntryPoint
    /// address and chain id.
    pub fn hash(&self, entry_point: Address, chain_id: u64) -> B256 {
        let packed = (
            self.sender,
            self.nonce,
            keccak256(&self.init_code),
            keccak256(&self.call_data),
            self.call_gas_limit,
            self.verification_gas_limit,
            self.pre_verification_gas,
            self.max_fee_per_gas,
            self.max_priority_fee_per_gas,
            keccak256(&self.paymaster_and_data),
        )
            .abi_encode();

        keccak256((keccak256(packed), entry_point, U256::from(chain_id)).abi_encode())
    }
}

/// Placeholder 65-byte ECDSA signature used during gas estimation, before
/// the real signature exists.
pub fn dummy_signature() -> Bytes {
    let mut sig = vec![0xffu8; 65];
    sig[64] = 0x1c;
    Bytes::from(sig)
}

/// Result of `eth_estimateUserOperationGas`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEstimate {
    pub pre_verification_gas: U256,
    pub verification_gas_limit: U256,
    pub call_gas_limit: U256,
}

/// One fee tier of `pimlico_getUserOperationGasPrice`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasFee {
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GasPriceTiers {
    pub slow: GasFee,
    pub standard: GasFee,
    pub fast: GasFee,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_op() -> UserOperation {
        UserOperation {
            sender: Address::ZERO,
            nonce: U256::ZERO,
            init_code: Bytes::new(),
            call_data: Bytes::new(),
            call_gas_limit: U256::ZERO,
            verification_gas_limit: U256::ZERO,
            pre_verification_gas: U256::ZERO,
            max_fee_per_gas: U256::ZERO,
            max_priority_fee_per_gas: U256::ZERO,
            paymaster_and_data: Bytes::new(),
            signature: Bytes::new(),
        }
    }

    #[test]
    fn serializes_in_bundler_wire_form() {
        let json = serde_json::to_value(sample_op()).unwrap();
        assert_eq!(json["sender"], "0x0000000000000000000000000000000000000000");
        assert_eq!(json["nonce"], "0x0");
        assert_eq!(json["initCode"], "0x");
        assert_eq!(json["callData"], "0x");
        assert_eq!(json["callGasLimit"], "0x0");
        assert_eq!(json["maxFeePerGas"], "0x0");
        assert_eq!(json["paymasterAndData"], "0x");
        assert_eq!(json["signature"], "0x");
    }

    #[test]
    fn hash_binds_entry_point_and_chain_id() {
        let op = sample_op();
        let entry_point: Address = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789"
            .parse()
            .unwrap();
        let a = op.hash(entry_point, 8453);
        let b = op.hash(entry_point, 1);
        let c = op.hash(Address::ZERO, 8453);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_ignores_the_signature_field() {
        let mut op = sample_op();
        let entry_point = Address::ZERO;
        let before = op.hash(entry_point, 8453);
        op.signature = dummy_signature();
        assert_eq!(op.hash(entry_point, 8453), before);

        op.call_data = Bytes::from(vec![0x01]);
        assert_ne!(op.hash(entry_point, 8453), before);
    }

    #[test]
    fn dummy_signature_is_a_65_byte_ecdsa_placeholder() {
        let sig = dummy_signature();
        assert_eq!(sig.len(), 65);
        assert_eq!(sig[64], 0x1c);
    }

    #[test]
    fn deserializes_bundler_gas_responses() {
        let est: GasEstimate = serde_json::from_str(
            r#"{"preVerificationGas":"0xb710","verificationGasLimit":"0x13d5a","callGasLimit":"0x5208"}"#,
        )
        .unwrap();
        assert_eq!(est.call_gas_limit, U256::from(0x5208u64));

        let tiers: GasPriceTiers = serde_json::from_str(
            r#"{"slow":{"maxFeePerGas":"0x1","maxPriorityFeePerGas":"0x1"},
                "standard":{"maxFeePerGas":"0x2","maxPriorityFeePerGas":"0x1"},
                "fast":{"maxFeePerGas":"0x3","maxPriorityFeePerGas":"0x2"}}"#,
        )
        .unwrap();
        assert_eq!(tiers.fast.max_fee_per_gas, U256::from(3u64));
    }
}
