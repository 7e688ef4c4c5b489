pub mod account;
pub mod amount;
pub mod balances;
pub mod bundler;
pub mod calls;
pub mod config;
pub mod display;
pub mod error;
pub mod rpc;
pub mod tokens;
pub mod userop;
