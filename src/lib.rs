//! Batch read-only contract calls into a single network round trip through
//! an on-chain multicall aggregator.
//!
//! A [`Multicaller`] collects [`Call`] descriptors (target address, function,
//! arguments, per-call ABI, and an output path), then submits the whole batch
//! as one `tryAggregate` request and distributes the decoded results onto the
//! registered paths of a nested [`OutputNode`] tree.
//!
//! Transport-level failures reject the whole execution; with `require_all`
//! off, individual call failures land in-band as null slots instead.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

mod multicaller;

pub use config::{CallOptions, Network};
pub use domain::call::{Call, FunctionId};
pub use domain::output::OutputNode;
pub use error::MulticallError;
pub use infrastructure::ethereum::{
    create_provider, AlloyProvider, EthereumProvider, ProviderConfig,
};
pub use multicaller::Multicaller;
