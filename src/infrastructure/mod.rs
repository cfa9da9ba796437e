//! Alloy-facing implementations: ABI codec and RPC transports

pub mod abi;
pub mod ethereum;
