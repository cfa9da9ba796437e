//! Error taxonomy for batch execution

use thiserror::Error;

/// Errors surfaced by [`Multicaller::execute`](crate::Multicaller::execute).
///
/// Individual call failures under `require_all == false` are not errors; they
/// are written in-band as [`OutputNode::Null`](crate::OutputNode::Null).
#[derive(Error, Debug)]
pub enum MulticallError {
    /// The aggregator round trip itself failed: network error, or a contract
    /// revert when `require_all` is true. The whole batch is lost.
    #[error("transport error: {0}")]
    Transport(#[source] anyhow::Error),

    /// A registered call carried a target address that does not parse.
    #[error("invalid target address `{0}`")]
    InvalidAddress(String),

    /// The named function is not present in the ABI supplied with the call.
    #[error("function `{0}` not found in the supplied ABI")]
    UnknownFunction(String),

    /// A bare function name matched several overloads. Supply the full
    /// canonical signature (e.g. `balanceOf(address)`) instead.
    #[error("function `{name}` has {count} overloads, supply a full signature")]
    AmbiguousFunction { name: String, count: usize },

    /// Argument encoding or return-data decoding failed.
    #[error("abi codec error: {0}")]
    Codec(#[from] alloy_dyn_abi::Error),

    /// The aggregator response was not positionally aligned with the batch.
    #[error("aggregator returned {got} results for {expected} calls")]
    ResultLengthMismatch { got: usize, expected: usize },

    /// A network string did not match any known deployment.
    #[error("unknown network `{0}`")]
    UnknownNetwork(String),
}
