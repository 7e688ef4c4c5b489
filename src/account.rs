use crate::bundler::BundlerClient;
use crate::calls::EncodedCall;
use crate::config::{CHAIN_ID, Config};
use crate::error::{Error, Result};
use crate::rpc::RpcClient;
use crate::userop::{UserOperation, dummy_signature};
use alloy::signers::SignerSync;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use alloy::sol_types::SolCall;
use alloy_primitives::aliases::U192;
use alloy_primitives::{Address, B256, Bytes, U256, address};
use tracing::{debug, info};

/// EntryPoint v0.6 and the canonical SimpleAccountFactory deployed behind it.
pub const ENTRY_POINT: Address = address!("0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789");
pub const FACTORY: Address = address!("0x9406Cc6185a346906296840746125a0E44976454");

const SALT: U256 = U256::ZERO;

sol! {
    function execute(address dest, uint256 value, bytes calldata func) external;
    function executeBatch(address[] calldata dest, bytes[] calldata func) external;
    function createAccount(address owner, uint256 salt) external returns (address);
    function getAddress(address owner, uint256 salt) external view returns (address);
    function getNonce(address sender, uint192 key) external view returns (uint256);
}

/// The smart-account address the factory will deploy (or has deployed) for
/// this owner.
pub async fn counterfactual_address(rpc: &RpcClient, owner: Address) -> Result<Address> {
    rpc.call(FACTORY, getAddressCall { owner, salt: SALT })
        .await
        .map_err(|e| Error::query("smart account address", e))
}

/// A smart-account identity bound to one signing key, one chain, and one
/// bundler endpoint. Owns no state beyond the process lifetime.
pub struct AccountSession {
    signer: PrivateKeySigner,
    account: Address,
    rpc: RpcClient,
    bundler: BundlerClient,
}

impl AccountSession {
    pub async fn connect(config: &Config) -> Result<Self> {
        let signer: PrivateKeySigner = config
            .private_key
            .parse()
            .map_err(|_| Error::Configuration("PRIVATE_KEY is not a valid private key".to_string()))?;

        let rpc = RpcClient::connect(&config.rpc_endpoint)?;
        let bundler = BundlerClient::connect(&config.bundler_url(), ENTRY_POINT)?;
        let account = counterfactual_address(&rpc, signer.address()).await?;

        Ok(AccountSession { signer, account, rpc, bundler })
    }

    /// Smart-account address.
    pub fn address(&self) -> Address {
        self.account
    }

    /// EOA that owns the account.
    pub fn owner(&self) -> Address {
        self.signer.address()
    }

    /// Signs and submits all calls as one user operation, i.e. one atomic
    /// on-chain transaction. Returns the user-operation hash.
    pub async fn submit(&self, calls: &[EncodedCall]) -> Result<B256> {
        if calls.is_empty() {
            return Err(Error::EmptyBatch);
        }

        let call_data = account_call_data(calls);
        let nonce = self
            .rpc
            .call(ENTRY_POINT, getNonceCall { sender: self.account, key: U192::ZERO })
            .await
            .map_err(Error::submission)?;

        let deployed = !self
            .rpc
            .get_code(self.account)
            .await
            .map_err(Error::submission)?
            .is_empty();
        let init_code = if deployed {
            Bytes::new()
        } else {
            info!("Account not yet deployed, attaching factory init code");
            init_code(self.signer.address())
        };

        let fees = self.bundler.gas_price().await.map_err(Error::submission)?;

        let mut op = UserOperation {
            sender: self.account,
            nonce,
            init_code,
            call_data,
            call_gas_limit: U256::ZERO,
            verification_gas_limit: U256::ZERO,
            pre_verification_gas: U256::ZERO,
            max_fee_per_gas: fees.max_fee_per_gas,
            max_priority_fee_per_gas: fees.max_priority_fee_per_gas,
            paymaster_and_data: Bytes::new(),
            signature: dummy_signature(),
        };

        let estimate = self.bundler.estimate_gas(&op).await.map_err(Error::submission)?;
        op.call_gas_limit = estimate.call_gas_limit;
        op.verification_gas_limit = estimate.verification_gas_limit;
        op.pre_verification_gas = estimate.pre_verification_gas;

        let hash = op.hash(ENTRY_POINT, CHAIN_ID);
        let signature = self
            .signer
            .sign_message_sync(hash.as_slice())
            .map_err(|e| Error::Submission(e.to_string()))?;
        op.signature = Bytes::from(signature.as_bytes().to_vec());

        debug!(nonce = %op.nonce, calls = calls.len(), "Submitting user operation");
        self.bundler
            .send_user_operation(&op)
            .await
            .map_err(Error::submission)
    }
}

/// Wraps the calls for the account contract: `execute` for one call,
/// `executeBatch` for several. Token transfers carry no native value, so the
/// batch form drops the value field.
fn account_call_data(calls: &[EncodedCall]) -> Bytes {
    match calls {
        [call] => executeCall {
            dest: call.target,
            value: call.value,
            func: call.data.clone(),
        }
        .abi_encode()
        .into(),
        _ => executeBatchCall {
            dest: calls.iter().map(|c| c.target).collect(),
            func: calls.iter().map(|c| c.data.clone()).collect(),
        }
        .abi_encode()
        .into(),
    }
}

fn init_code(owner: Address) -> Bytes {
    let call = createAccountCall { owner, salt: SALT };
    let mut code = FACTORY.to_vec();
    code.extend(call.abi_encode());
    code.into()
}
